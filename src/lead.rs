//! Lead capture: the contact record that gates result display.
//!
//! A lead is complete when name, e-mail and company validate; WhatsApp is
//! optional but must be a plausible Brazilian number when present. Results
//! and reports are only rendered for complete leads.

use crate::validate;

/// The individual fields of a lead, used for per-field validation and
/// error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Whatsapp,
}

impl LeadField {
    /// Label used in prompts and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "e-mail",
            LeadField::Company => "company",
            LeadField::Whatsapp => "whatsapp",
        }
    }

    /// What a valid value looks like, phrased for the user.
    pub fn requirement(&self) -> &'static str {
        match self {
            LeadField::Name => "Enter first and last name, letters only.",
            LeadField::Email => "Enter a valid e-mail, like ana@empresa.com.br.",
            LeadField::Company => {
                "Company needs at least 2 characters: letters, numbers and . , & -"
            }
            LeadField::Whatsapp => {
                "Enter a Brazilian number like (11) 90000-0000 or +55 11 90000-0000, or leave it empty."
            }
        }
    }

    /// Run this field's predicate against a candidate value.
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            LeadField::Name => validate::is_valid_name(value),
            LeadField::Email => validate::is_valid_email(value),
            LeadField::Company => validate::is_valid_company(value),
            LeadField::Whatsapp => validate::is_valid_phone(value),
        }
    }
}

/// A single failed field with its user-facing requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: LeadField,
    pub message: &'static str,
}

/// Contact details captured before results are shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Optional; empty means not provided
    pub whatsapp: String,
}

impl Lead {
    /// Validate every field and collect the failures in display order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let fields = [
            (LeadField::Name, self.name.as_str()),
            (LeadField::Email, self.email.as_str()),
            (LeadField::Company, self.company.as_str()),
            (LeadField::Whatsapp, self.whatsapp.as_str()),
        ];

        fields
            .into_iter()
            .filter(|(field, value)| !field.is_valid(value))
            .map(|(field, _)| FieldError {
                field,
                message: field.requirement(),
            })
            .collect()
    }

    /// The gate: true once every field validates.
    pub fn is_complete(&self) -> bool {
        self.field_errors().is_empty()
    }
}
