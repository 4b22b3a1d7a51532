//! Declarative form validation.
//!
//! Each form has a [`RuleSet`]: an ordered list of [`Rule`]s checked
//! top to bottom. The first failing rule is the only error reported.

mod rules;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{api::ApiError, utils::time};

pub use rules::{digits_only, Rule};

pub mod fields {
    pub const NOMBRE: &str = "nombre";
    pub const APELLIDO: &str = "apellido";
    pub const DNI: &str = "dni";
    pub const CUIL_CUIT: &str = "cuil_cuit";
    pub const EMAIL: &str = "email";
    pub const TELEFONO: &str = "telefono";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const CHECK_IN: &str = "fecha_check_in";
    pub const CHECK_OUT: &str = "fecha_check_out";
    pub const ROOMS: &str = "cantidad_habitaciones";
    pub const ID: &str = "id";
}

pub const MAX_ROOMS: i64 = 4;

/// Raw string values of a form, keyed by field name. Missing fields read as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, for fields sent to the backend.
    pub fn trimmed(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn current() -> Self {
        Self::new(time::today())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn validate(
        &self,
        fields: &FormFields,
        ctx: &ValidationContext,
    ) -> Result<(), ValidationError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(fields, ctx))
    }

    pub fn registration() -> Self {
        use fields::*;
        Self::new(vec![
            Rule::Matches {
                field: CONFIRM_PASSWORD,
                other: PASSWORD,
                message: "Las contraseñas no coinciden",
            },
            Rule::MinChars {
                field: NOMBRE,
                min: 2,
                message: "El nombre debe tener al menos 2 caracteres",
            },
            Rule::MinChars {
                field: APELLIDO,
                min: 2,
                message: "El apellido debe tener al menos 2 caracteres",
            },
            dni_rule(),
            Rule::Digits {
                field: CUIL_CUIT,
                strip: &['-'],
                ignore_whitespace: true,
                min: 10,
                max: Some(13),
                message: "El CUIL/CUIT debe contener solo números y tener entre 10 y 13 dígitos",
            },
            Rule::Digits {
                field: TELEFONO,
                strip: &['(', ')', '-'],
                ignore_whitespace: true,
                min: 8,
                max: None,
                message: "El teléfono debe contener solo números y tener al menos 8 dígitos",
            },
            Rule::MinChars {
                field: PASSWORD,
                min: 8,
                message: "La contraseña debe tener al menos 8 caracteres",
            },
        ])
    }

    pub fn login() -> Self {
        Self::new(vec![
            dni_rule(),
            Rule::Required {
                field: fields::PASSWORD,
                message: "Ingresa tu contraseña",
            },
        ])
    }

    pub fn reservation() -> Self {
        use fields::*;
        Self::new(vec![
            Rule::Date {
                field: CHECK_IN,
                message: "Ingresa una fecha de entrada válida.",
            },
            Rule::Date {
                field: CHECK_OUT,
                message: "Ingresa una fecha de salida válida.",
            },
            Rule::DateNotPast {
                field: CHECK_IN,
                message: "La fecha de entrada no puede ser anterior a hoy.",
            },
            Rule::DateAfter {
                field: CHECK_OUT,
                earlier: CHECK_IN,
                message: "La fecha de salida debe ser posterior a la fecha de entrada.",
            },
            Rule::IntRange {
                field: ROOMS,
                min: 1,
                max: MAX_ROOMS,
                message: "El número de habitaciones debe estar entre 1 y 4",
            },
        ])
    }

    pub fn user_edit() -> Self {
        use fields::*;
        const REQUIRED: &str = "Todos los campos son obligatorios.";
        Self::new(vec![
            Rule::Required {
                field: NOMBRE,
                message: REQUIRED,
            },
            Rule::Required {
                field: APELLIDO,
                message: REQUIRED,
            },
            Rule::Required {
                field: EMAIL,
                message: REQUIRED,
            },
            Rule::Email {
                field: EMAIL,
                message: "Por favor, ingresa un email válido.",
            },
        ])
    }
}

// DNI is checked raw: no trimming, no separators.
fn dni_rule() -> Rule {
    Rule::Digits {
        field: fields::DNI,
        strip: &[],
        ignore_whitespace: false,
        min: 7,
        max: Some(8),
        message: "El DNI debe contener solo números y tener 7 u 8 dígitos",
    }
}
