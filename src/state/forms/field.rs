//! Form field value objects

use crate::phone::is_complete_phone;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// One-of-many choice, None until the user picks an option
    Select {
        options: Vec<&'static str>,
        selected: Option<usize>,
    },
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Declarative constraints checked on blur, mirroring the validation
/// attributes a form field would carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Email,
    Phone,
}

/// Validation mark for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Never validated (field untouched)
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// Represents a single form field with its configuration, value and
/// validation mark
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub constraints: Vec<Constraint>,
    pub validity: Validity,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool, constraints: &[Constraint]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            constraints: constraints.to_vec(),
            validity: Validity::Unchecked,
        }
    }

    /// Create a new select field
    pub fn select(name: &str, label: &str, options: Vec<&'static str>, required: bool) -> Self {
        let constraints = if required {
            vec![Constraint::Required]
        } else {
            vec![]
        };
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options,
                selected: None,
            },
            is_multiline: false,
            constraints,
            validity: Validity::Unchecked,
        }
    }

    /// Create a new checkbox field (never required)
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(false),
            is_multiline: false,
            constraints: vec![],
            validity: Validity::Unchecked,
        }
    }

    /// Get the text value (empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the selected option label (empty string when nothing is chosen)
    pub fn selected_option(&self) -> &str {
        match &self.value {
            FieldValue::Select { options, selected } => {
                selected.and_then(|i| options.get(i).copied()).unwrap_or("")
            }
            _ => "",
        }
    }

    /// Get the checkbox state (false for non-checkbox fields)
    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Select { options, selected } => {
                // Digits pick an option directly (1-based)
                if let Some(d) = c.to_digit(10) {
                    let idx = (d as usize).wrapping_sub(1);
                    if idx < options.len() {
                        *selected = Some(idx);
                    }
                }
            }
            FieldValue::Checkbox(checked) => {
                if c == ' ' {
                    *checked = !*checked;
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Cycle a select field to the next option
    pub fn next_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(selected.map_or(0, |i| (i + 1) % options.len()));
        }
    }

    /// Cycle a select field to the previous option
    pub fn prev_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            let last = options.len() - 1;
            *selected = Some(selected.map_or(last, |i| if i == 0 { last } else { i - 1 }));
        }
    }

    /// Toggle a checkbox field
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(checked) = &mut self.value {
            *checked = !*checked;
        }
    }

    /// Clear the field value and validation mark
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
            FieldValue::Checkbox(checked) => *checked = false,
        }
        self.validity = Validity::Unchecked;
    }

    /// Check the field value against its constraints without marking it
    pub fn check_validity(&self) -> bool {
        self.constraints.iter().all(|c| self.satisfies(*c))
    }

    /// Check the constraints and record the result as the validation mark.
    /// Returns the outcome.
    pub fn validate(&mut self) -> bool {
        let ok = self.check_validity();
        self.validity = if ok { Validity::Valid } else { Validity::Invalid };
        ok
    }

    /// Re-validate only if the field is already marked invalid
    pub fn revalidate_if_invalid(&mut self) {
        if self.validity == Validity::Invalid {
            self.validate();
        }
    }

    fn satisfies(&self, constraint: Constraint) -> bool {
        match constraint {
            Constraint::Required => match &self.value {
                FieldValue::Text(s) => !s.trim().is_empty(),
                FieldValue::Select { selected, .. } => selected.is_some(),
                FieldValue::Checkbox(_) => true,
            },
            Constraint::Email => is_plausible_email(self.as_text()),
            Constraint::Phone => is_complete_phone(self.as_text()),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { .. } => {
                let label = self.selected_option();
                if label.is_empty() {
                    "Velg...".to_string()
                } else {
                    label.to_string()
                }
            }
            FieldValue::Checkbox(checked) => {
                if *checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }
}

/// Minimal email shape check: non-empty local part, `@`, and a dot inside
/// the domain. Matches what `type="email"` accepts in spirit.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || value.contains(' ') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod text_fields {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text("name", "Navn", false, &[Constraint::Required]);
            field.push_char('O');
            field.push_char('l');
            field.push_char('a');
            assert_eq!(field.as_text(), "Ola");
            field.pop_char();
            assert_eq!(field.as_text(), "Ol");
        }

        #[test]
        fn test_required_rejects_blank() {
            let mut field = FormField::text("name", "Navn", false, &[Constraint::Required]);
            assert!(!field.validate());
            assert_eq!(field.validity, Validity::Invalid);

            field.set_text("   ".to_string());
            assert!(!field.validate());

            field.set_text("Ola".to_string());
            assert!(field.validate());
            assert_eq!(field.validity, Validity::Valid);
        }

        #[test]
        fn test_clear_resets_validity() {
            let mut field = FormField::text("name", "Navn", false, &[Constraint::Required]);
            field.set_text("Ola".to_string());
            field.validate();
            field.clear();
            assert_eq!(field.as_text(), "");
            assert_eq!(field.validity, Validity::Unchecked);
        }

        #[test]
        fn test_revalidate_only_when_invalid() {
            let mut field = FormField::text("name", "Navn", false, &[Constraint::Required]);

            // Untouched field stays unchecked on input
            field.push_char('O');
            field.revalidate_if_invalid();
            assert_eq!(field.validity, Validity::Unchecked);

            // Marked invalid, then corrected: input re-validates
            field.clear();
            field.validate();
            assert_eq!(field.validity, Validity::Invalid);
            field.push_char('O');
            field.revalidate_if_invalid();
            assert_eq!(field.validity, Validity::Valid);
        }
    }

    mod email_constraint {
        use super::*;

        fn email_field(value: &str) -> FormField {
            let mut f = FormField::text(
                "email",
                "E-post",
                false,
                &[Constraint::Required, Constraint::Email],
            );
            f.set_text(value.to_string());
            f
        }

        #[test]
        fn test_accepts_plain_address() {
            assert!(email_field("ola@example.com").check_validity());
        }

        #[test]
        fn test_rejects_missing_at() {
            assert!(!email_field("ola.example.com").check_validity());
        }

        #[test]
        fn test_rejects_missing_domain_dot() {
            assert!(!email_field("ola@example").check_validity());
        }

        #[test]
        fn test_rejects_empty_parts() {
            assert!(!email_field("@example.com").check_validity());
            assert!(!email_field("ola@").check_validity());
            assert!(!email_field("ola@.com").check_validity());
        }

        #[test]
        fn test_rejects_spaces() {
            assert!(!email_field("ola nordmann@example.com").check_validity());
        }
    }

    mod phone_constraint {
        use super::*;

        fn phone_field(value: &str) -> FormField {
            let mut f = FormField::text(
                "phone",
                "Telefon",
                false,
                &[Constraint::Required, Constraint::Phone],
            );
            f.set_text(value.to_string());
            f
        }

        #[test]
        fn test_complete_number_is_valid() {
            assert!(phone_field("123 45 678").check_validity());
        }

        #[test]
        fn test_partial_number_is_invalid() {
            assert!(!phone_field("123 45").check_validity());
        }
    }

    mod select_fields {
        use super::*;

        fn project_type() -> FormField {
            FormField::select(
                "projectType",
                "Type prosjekt",
                vec!["Nybygg", "Tilbygg"],
                true,
            )
        }

        #[test]
        fn test_unselected_required_is_invalid() {
            let mut field = project_type();
            assert!(!field.validate());
        }

        #[test]
        fn test_next_option_cycles() {
            let mut field = project_type();
            field.next_option();
            assert_eq!(field.selected_option(), "Nybygg");
            field.next_option();
            assert_eq!(field.selected_option(), "Tilbygg");
            field.next_option();
            assert_eq!(field.selected_option(), "Nybygg");
        }

        #[test]
        fn test_prev_option_wraps_to_last() {
            let mut field = project_type();
            field.prev_option();
            assert_eq!(field.selected_option(), "Tilbygg");
        }

        #[test]
        fn test_digit_picks_option() {
            let mut field = project_type();
            field.push_char('2');
            assert_eq!(field.selected_option(), "Tilbygg");
            field.push_char('9');
            assert_eq!(field.selected_option(), "Tilbygg");
        }

        #[test]
        fn test_display_placeholder_when_empty() {
            let field = project_type();
            assert_eq!(field.display_value(), "Velg...");
        }
    }

    mod checkbox_fields {
        use super::*;

        #[test]
        fn test_toggle() {
            let mut field = FormField::checkbox("siteVisit", "Ønsker befaring");
            assert!(!field.is_checked());
            field.toggle();
            assert!(field.is_checked());
            field.push_char(' ');
            assert!(!field.is_checked());
        }

        #[test]
        fn test_checkbox_is_always_valid() {
            let mut field = FormField::checkbox("siteVisit", "Ønsker befaring");
            assert!(field.validate());
            assert_eq!(field.display_value(), "[ ]");
        }
    }
}
