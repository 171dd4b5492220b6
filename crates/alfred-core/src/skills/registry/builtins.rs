//! Built-in skill catalogue
//!
//! Static descriptions of the skills Alfred ships with: their config
//! fragments, dependencies, the tasks they run and how they adjust
//! themselves when a known peer is present.

use super::super::types::{CommandHook, ConfigFile, FileType, Skill, SkillFile};
use super::types::SkillRegistry;
use crate::error::{AlfredError, AlfredResult};
use crate::target::{Env, Platform, ProjectType, Supports};
use crate::tasks::{BUILD, FORMAT, LINT, START, TEST};
use serde_json::json;

/// Every skill in the catalogue
pub const BUILTIN_SKILLS: &[&str] = &[
    "babel", "eslint", "prettier", "react", "jest", "mocha", "webpack", "parcel", "lodash",
];

/// Skills a new project starts with
pub const DEFAULT_SKILLS: &[&str] = &["babel", "eslint", "prettier", "jest", "webpack"];

/// Look up a catalogue skill by name
pub fn builtin_skill(name: &str) -> Option<Skill> {
    let skill = match name {
        "babel" => babel(),
        "eslint" => eslint(),
        "prettier" => prettier(),
        "react" => react(),
        "jest" => jest(),
        "mocha" => mocha(),
        "webpack" => webpack(),
        "parcel" => parcel(),
        "lodash" => lodash(),
        _ => return None,
    };
    Some(skill)
}

/// The whole catalogue, in catalogue order
pub fn builtin_skills() -> Vec<Skill> {
    BUILTIN_SKILLS.iter().filter_map(|name| builtin_skill(name)).collect()
}

impl SkillRegistry {
    /// Register a catalogue skill by name
    pub fn register_builtin(&mut self, name: &str) -> AlfredResult<()> {
        let skill = builtin_skill(name).ok_or_else(|| {
            AlfredError::not_found_resource(
                format!(
                    "'{}' is not a known skill (available: {})",
                    name,
                    BUILTIN_SKILLS.join(", ")
                ),
                "Skill",
            )
        })?;
        self.register(skill)
    }

    /// Register several catalogue skills, stopping at the first failure
    pub fn register_builtins<S: AsRef<str>>(&mut self, names: &[S]) -> AlfredResult<()> {
        for name in names {
            self.register_builtin(name.as_ref())?;
        }
        Ok(())
    }
}

fn babel() -> Skill {
    Skill::new("babel", "Transpile JS from ESNext to the latest ES version")
        .with_config(ConfigFile::new(
            "babel",
            ".babelrc",
            FileType::Json,
            json!({
                "presets": ["@babel/preset-env"],
                "plugins": []
            }),
        ))
        .with_dev_dependency("@babel/core", "7.2.2")
        .with_dev_dependency("@babel/preset-env", "7.3.1")
        .with_transform("react", |skill, ctx| {
            let development = ctx.target.env == Env::Development;
            Ok(skill
                .extend_config(
                    "babel",
                    json!({"presets": [["@babel/preset-react", {"development": development}]]}),
                )?
                .add_dev_dependencies([("@babel/preset-react", "7.0.0")]))
        })
        .with_transform("lodash", |skill, _| {
            Ok(skill
                .extend_config("babel", json!({"plugins": ["babel-plugin-lodash"]}))?
                .add_dev_dependencies([("babel-plugin-lodash", "3.3.4")]))
        })
}

fn eslint() -> Skill {
    Skill::new("eslint", "Lint all your JS files")
        .with_config(ConfigFile::new(
            "eslint",
            ".eslintrc.json",
            FileType::Json,
            json!({
                "extends": ["eslint:recommended"],
                "env": {"browser": true, "es6": true, "node": true},
                "parserOptions": {"ecmaVersion": 2018, "sourceType": "module"},
                "rules": {}
            }),
        ))
        .with_config(ConfigFile::new(
            "eslintIgnore",
            ".eslintignore",
            FileType::String,
            json!(["node_modules", "targets"]),
        ))
        .with_dev_dependency("eslint", "5.13.0")
        .with_hook(
            LINT,
            CommandHook::new("eslint").with_args([
                "--config",
                "{configs}/.eslintrc.json",
                "--ignore-path",
                "{configs}/.eslintignore",
                "--ext",
                ".js,.jsx",
                "src",
                "tests",
            ]),
        )
        .with_supports(Supports::all())
        .as_default()
        .with_transform("babel", |skill, _| {
            Ok(skill
                .extend_config("eslint", json!({"parser": "babel-eslint"}))?
                .add_dev_dependencies([("babel-eslint", "10.0.1")]))
        })
        .with_transform("react", |skill, _| {
            Ok(skill
                .extend_config(
                    "eslint",
                    json!({
                        "extends": ["airbnb"],
                        "plugins": ["react"],
                        "parserOptions": {"ecmaFeatures": {"jsx": true}}
                    }),
                )?
                .add_dev_dependencies([
                    ("eslint-config-airbnb", "17.1.0"),
                    ("eslint-plugin-react", "7.12.4"),
                ]))
        })
        .with_transform("prettier", |skill, _| {
            Ok(skill
                .extend_config(
                    "eslint",
                    json!({
                        "extends": ["prettier"],
                        "plugins": ["prettier"],
                        "rules": {"prettier/prettier": "error"}
                    }),
                )?
                .add_dev_dependencies([
                    ("eslint-config-prettier", "4.0.0"),
                    ("eslint-plugin-prettier", "3.0.1"),
                ]))
        })
        .with_transform("jest", |skill, _| {
            skill.extend_config("eslint", json!({"env": {"jest": true}}))
        })
        .with_transform("mocha", |skill, _| {
            skill.extend_config("eslint", json!({"env": {"mocha": true}}))
        })
}

fn prettier() -> Skill {
    Skill::new("prettier", "Format the style of source files")
        .with_config(
            ConfigFile::new(
                "prettier",
                ".prettierrc",
                FileType::Json,
                json!({"singleQuote": true, "trailingComma": "es5"}),
            )
            .embedded_as("prettier"),
        )
        .with_dev_dependency("prettier", "1.16.4")
        .with_hook(
            FORMAT,
            CommandHook::new("prettier").with_args(["--write", "src/**/*.js", "tests/**/*.js"]),
        )
        .with_supports(Supports::all())
        .as_default()
}

fn react() -> Skill {
    Skill::new("react", "A JavaScript library for building user interfaces")
        .with_dependency("react", "16.8.1")
        .with_dependency("react-dom", "16.8.1")
        .with_supports(Supports::new(
            &[Platform::Browser, Platform::Electron, Platform::ReactNative],
            &ProjectType::ALL,
        ))
}

fn jest() -> Skill {
    Skill::new("jest", "Test your JS files")
        .with_config(ConfigFile::new(
            "jest",
            "jest.config.js",
            FileType::Module,
            json!({
                "testEnvironment": "jsdom",
                "testPathIgnorePatterns": ["/node_modules/", "/targets/"]
            }),
        ))
        .with_dev_dependency("jest", "24.1.0")
        .with_hook(
            TEST,
            CommandHook::new("jest").with_args(["--config", "{configs}/jest.config.js"]),
        )
        .with_supports(Supports::all())
        .as_default()
        .with_file(SkillFile::new(
            "tests/setup.js",
            "// Runs before every test file\n",
        ))
        .with_transform("babel", |skill, _| {
            Ok(skill
                .extend_config(
                    "jest",
                    json!({"transform": {"^.+\\.jsx?$": "babel-jest"}}),
                )?
                .add_dev_dependencies([("babel-jest", "24.1.0")]))
        })
}

fn mocha() -> Skill {
    Skill::new("mocha", "Test your JS files with mocha")
        .with_config(ConfigFile::new(
            "mocha",
            ".mocharc.json",
            FileType::Json,
            json!({"spec": "tests/**/*.spec.js", "recursive": true, "require": []}),
        ))
        .with_dev_dependency("mocha", "5.2.0")
        .with_hook(
            TEST,
            CommandHook::new("mocha").with_args(["--config", "{configs}/.mocharc.json"]),
        )
        .with_supports(Supports::new(&[Platform::Node], &ProjectType::ALL))
        .with_transform("babel", |skill, _| {
            Ok(skill
                .extend_config("mocha", json!({"require": ["@babel/register"]}))?
                .add_dev_dependencies([("@babel/register", "7.0.0")]))
        })
}

fn webpack() -> Skill {
    Skill::new("webpack", "Build, optimize, and bundle assets in your app")
        .with_config(ConfigFile::new(
            "webpack",
            "webpack.config.js",
            FileType::Module,
            json!({
                "entry": "./src/index.js",
                "output": {"path": "targets", "filename": "bundle.js"},
                "module": {"rules": []},
                "resolve": {"extensions": [".js", ".json"]},
                "plugins": []
            }),
        ))
        .with_dev_dependency("webpack", "4.29.3")
        .with_dev_dependency("webpack-cli", "3.2.3")
        .with_dev_dependency("webpack-dev-server", "3.1.14")
        .with_hook(
            BUILD,
            CommandHook::new("webpack").with_args([
                "--config",
                "{configs}/webpack.config.js",
                "--mode",
                "{env}",
            ]),
        )
        .with_hook(
            START,
            CommandHook::new("webpack-dev-server")
                .with_args(["--config", "{configs}/webpack.config.js"]),
        )
        .with_supports(Supports::new(
            &[Platform::Browser, Platform::Node, Platform::Electron],
            &ProjectType::ALL,
        ))
        .as_default()
        .with_file(SkillFile::new(
            "src/index.html",
            "<!DOCTYPE html>\n<html>\n  <body>\n    <script src=\"../targets/bundle.js\"></script>\n  </body>\n</html>\n",
        ))
        .with_transform("babel", |skill, _| {
            Ok(skill
                .extend_config(
                    "webpack",
                    json!({"module": {"rules": [{
                        "test": "\\.jsx?$",
                        "exclude": "/node_modules/",
                        "loader": "babel-loader"
                    }]}}),
                )?
                .add_dev_dependencies([("babel-loader", "8.0.5")]))
        })
        .with_transform("eslint", |skill, _| {
            Ok(skill
                .extend_config(
                    "webpack",
                    json!({"module": {"rules": [{
                        "test": "\\.jsx?$",
                        "exclude": "/node_modules/",
                        "enforce": "pre",
                        "loader": "eslint-loader"
                    }]}}),
                )?
                .add_dev_dependencies([("eslint-loader", "2.1.2")]))
        })
        .with_transform("react", |skill, _| {
            skill.extend_config("webpack", json!({"resolve": {"extensions": [".jsx"]}}))
        })
}

fn parcel() -> Skill {
    Skill::new("parcel", "Zero configuration bundler for the web")
        .with_config(
            ConfigFile::new("parcel", ".parcelrc", FileType::Json, json!({})).suppressed(),
        )
        .with_dev_dependency("parcel-bundler", "1.11.0")
        .with_hook(
            BUILD,
            CommandHook::new("parcel").with_args(["build", "src/index.html", "--out-dir", "targets"]),
        )
        .with_hook(START, CommandHook::new("parcel").with_args(["src/index.html"]))
        .with_supports(Supports::new(&[Platform::Browser], &[ProjectType::App]))
        .with_file(SkillFile::new(
            "src/index.html",
            "<!DOCTYPE html>\n<html>\n  <body>\n    <script src=\"./index.js\"></script>\n  </body>\n</html>\n",
        ))
}

fn lodash() -> Skill {
    Skill::new("lodash", "A modern JavaScript utility library").with_dependency("lodash", "4.17.11")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_complete_and_valid() {
        let skills = builtin_skills();
        assert_eq!(skills.len(), BUILTIN_SKILLS.len());
        for skill in &skills {
            skill.validate().unwrap();
        }
        for name in DEFAULT_SKILLS {
            assert!(BUILTIN_SKILLS.contains(name));
        }
    }

    #[test]
    fn test_skills_running_build_declare_supports() {
        for skill in builtin_skills() {
            if skill.implements(BUILD) {
                assert!(skill.supports.is_some(), "{} lacks supports", skill.name);
            }
        }
    }

    #[test]
    fn test_transform_peers_are_catalogue_skills() {
        for skill in builtin_skills() {
            for peer in skill.transform_peers() {
                assert!(BUILTIN_SKILLS.contains(&peer), "{} -> {}", skill.name, peer);
            }
        }
    }

    #[test]
    fn test_unknown_builtin() {
        let mut registry = SkillRegistry::new();
        let err = registry.register_builtin("grunt").unwrap_err();
        assert!(matches!(err, AlfredError::NotFound { .. }));
    }
}
