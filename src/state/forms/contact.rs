//! Contact form state

use super::field::{Constraint, FormField};
use crate::phone::format_phone;
use crate::state::Inquiry;

/// Project types offered in the form's select field
pub const PROJECT_TYPES: [&str; 5] = [
    "Nybygg",
    "Tilbygg",
    "Rehabilitering",
    "Tak og fasade",
    "Annet",
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The contact inquiry form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub address: FormField,
    pub project_type: FormField,
    pub description: FormField,
    pub site_visit: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Index of the send-button row (one past the last field)
    pub const BUTTONS_ROW: usize = 7;

    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Navn", false, &[Constraint::Required]),
            email: FormField::text(
                "email",
                "E-post",
                false,
                &[Constraint::Required, Constraint::Email],
            ),
            phone: FormField::text(
                "phone",
                "Telefon",
                false,
                &[Constraint::Required, Constraint::Phone],
            ),
            address: FormField::text("address", "Adresse", false, &[]),
            project_type: FormField::select(
                "projectType",
                "Type prosjekt",
                PROJECT_TYPES.to_vec(),
                true,
            ),
            description: FormField::text(
                "description",
                "Beskrivelse",
                true,
                &[Constraint::Required],
            ),
            site_visit: FormField::checkbox("siteVisit", "Ønsker befaring"),
            active_field_index: 0,
        }
    }

    /// Returns true if the send-button row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Move focus forward, validating the field being left (blur)
    pub fn focus_next(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.validate();
        }
        self.next_field();
    }

    /// Move focus backward, validating the field being left (blur)
    pub fn focus_prev(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.validate();
        }
        self.prev_field();
    }

    /// Feed a typed character into the active field.
    ///
    /// The phone field re-formats after every keystroke; a field already
    /// marked invalid is re-checked so corrections clear the mark as soon
    /// as they land.
    pub fn input(&mut self, c: char) {
        let is_phone = self.active_field_index == 2;
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            if is_phone {
                let formatted = format_phone(field.as_text());
                field.set_text(formatted);
            }
            field.revalidate_if_invalid();
        }
    }

    /// Handle backspace in the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            field.revalidate_if_invalid();
        }
    }

    /// Validate every field, marking each. Returns true when all pass.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in self.fields_mut() {
            ok &= field.validate();
        }
        ok
    }

    /// Capture the current values as an immutable submission snapshot
    pub fn snapshot(&self) -> Inquiry {
        Inquiry::new(
            self.name.as_text(),
            self.email.as_text(),
            self.phone.as_text(),
            self.address.as_text(),
            self.project_type.selected_option(),
            self.description.as_text(),
            self.site_visit.is_checked(),
        )
    }

    /// Clear all fields and validation marks, and return focus to the top
    pub fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// True when any field currently carries a value
    pub fn is_dirty(&self) -> bool {
        !self.name.as_text().is_empty()
            || !self.email.as_text().is_empty()
            || !self.phone.as_text().is_empty()
            || !self.address.as_text().is_empty()
            || !self.project_type.selected_option().is_empty()
            || !self.description.as_text().is_empty()
            || self.site_visit.is_checked()
    }

    fn fields_mut(&mut self) -> [&mut FormField; 7] {
        [
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.address,
            &mut self.project_type,
            &mut self.description,
            &mut self.site_visit,
        ]
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        8 // seven fields plus the send-button row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.address),
            4 => Some(&mut self.project_type),
            5 => Some(&mut self.description),
            6 => Some(&mut self.site_visit),
            _ => None, // buttons row
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.address),
            4 => Some(&self.project_type),
            5 => Some(&self.description),
            6 => Some(&self.site_visit),
            _ => None,
        }
    }
}
