//! # Template Registry
//!
//! Every view is embedded at compile time and parsed once at startup, so a
//! broken template stops the process before it binds a port.
//!
//! ```text
//! templates/
//! ├── layout.html                 base page, {% block content %}
//! ├── logistics/
//! │   ├── index.html              dashboard
//! │   ├── items.html / item.html  list / detail + new form
//! │   ├── addresses.html / address.html
//! │   └── plants.html / plant.html
//! └── accounting/
//!     ├── index.html
//!     ├── accounts.html / account.html
//!     ├── documents.html / document.html
//!     └── position_row.html       included once per position
//! ```

use std::sync::Arc;

use apex_core::Money;
use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::error::AppError;

macro_rules! template {
    ($name:literal) => {
        ($name, include_str!(concat!("../../templates/", $name)))
    };
}

const SOURCES: &[(&str, &str)] = &[
    template!("layout.html"),
    template!("logistics/index.html"),
    template!("logistics/items.html"),
    template!("logistics/item.html"),
    template!("logistics/addresses.html"),
    template!("logistics/address.html"),
    template!("logistics/plants.html"),
    template!("logistics/plant.html"),
    template!("accounting/index.html"),
    template!("accounting/accounts.html"),
    template!("accounting/account.html"),
    template!("accounting/documents.html"),
    template!("accounting/document.html"),
    template!("accounting/position_row.html"),
];

/// Parsed templates, shared by every handler.
#[derive(Debug, Clone)]
pub struct Templates {
    env: Arc<Environment<'static>>,
}

impl Templates {
    /// Parses every embedded template.
    ///
    /// ## Returns
    /// * `Err(minijinja::Error)` - A template has a syntax error
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        for &(name, source) in SOURCES {
            env.add_template(name, source)?;
        }

        env.add_filter("money", money);

        Ok(Templates { env: Arc::new(env) })
    }

    /// Renders template `name` with `context`.
    pub fn render<T: Serialize>(&self, name: &str, context: T) -> Result<Html<String>, AppError> {
        let template = self.env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }
}

/// `{{ item.gross_price | money }}` → `1.20`
fn money(minor: i64) -> String {
    Money::from_minor(minor).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_parse() {
        let templates = Templates::new().unwrap();
        for &(name, _) in SOURCES {
            assert!(templates.env.get_template(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_money_filter() {
        let mut env = Environment::new();
        env.add_filter("money", money);
        let out = env
            .render_str("{{ amount | money }}", context! { amount => 1205 })
            .unwrap();
        assert_eq!(out, "12.05");
    }

    #[test]
    fn test_unknown_template_is_internal() {
        let templates = Templates::new().unwrap();
        let err = templates.render("nope.html", ()).unwrap_err();
        assert_eq!(err.kind, apex_core::ErrorKind::Internal);
    }
}
