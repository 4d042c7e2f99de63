use crate::schema::{Field, OrderSchema};
use leptos::prelude::*;

/// The current user-entered state of the form. Reset to defaults after
/// every submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub size: String,
    pub toppings: Vec<String>,
}

impl FormValues {
    /// Adds the topping id when checked (at most once), removes it when
    /// unchecked. The sequence keeps insertion order; removal leaves the
    /// survivors in place.
    pub fn toggle_topping(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.has_topping(id) {
                self.toppings.push(id.to_string());
            }
        } else {
            self.toppings.retain(|t| t != id);
        }
    }

    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.iter().any(|t| t == id)
    }
}

/// Per-field validation messages; an empty string means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: String,
    pub size: String,
}

impl FieldErrors {
    fn set(&mut self, field: Field, message: String) {
        match field {
            Field::FullName => self.full_name = message,
            Field::Size => self.size = message,
        }
    }
}

/// What the server said about the last submit attempt. One slot, so a
/// success always clears a prior failure and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerNote {
    Success(String),
    Failure(String),
}

/// Hold the reactive state of the order form
#[derive(Debug, Clone)]
pub struct OrderForm {
    schema: OrderSchema,
    pub values: RwSignal<FormValues>,
    pub errors: RwSignal<FieldErrors>,
    pub server_note: RwSignal<Option<ServerNote>>,
    // Derived from values through the schema; recomputed only when the
    // value set changes, not on every render pass
    pub enabled: Signal<bool>,
}

impl OrderForm {
    pub fn new(schema: OrderSchema) -> OrderForm {
        let values = RwSignal::new(FormValues::default());
        let whole_form = schema.clone();
        let enabled = Signal::derive(move || whole_form.validates(&values.get()));
        OrderForm {
            schema,
            values,
            errors: RwSignal::new(FieldErrors::default()),
            server_note: RwSignal::new(None),
            enabled,
        }
    }

    /// Stores a changed field value and refreshes that field's error
    /// message: the first failing rule's message, or empty on success.
    pub fn edit_field(&self, field: Field, value: String) {
        let message = match self.schema.check_field(field, &value) {
            Ok(()) => String::new(),
            Err(message) => message.to_string(),
        };
        self.values.update(|values| match field {
            Field::FullName => values.full_name = value,
            Field::Size => values.size = value,
        });
        self.errors.update(|errors| errors.set(field, message));
    }

    pub fn toggle_topping(&self, id: &str, checked: bool) {
        self.values
            .update(|values| values.toggle_topping(id, checked));
    }

    /// Records the outcome of a submit attempt, replacing any prior note.
    pub fn record_note(&self, note: ServerNote) {
        self.server_note.set(Some(note));
    }

    /// Clears the entered values after a submit attempt. Field errors and
    /// the enabled flag are left to reactive recomputation.
    pub fn reset_values(&self) {
        self.values.set(FormValues::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_topping_keeps_insertion_order() {
        let mut values = FormValues::default();
        values.toggle_topping("1", true);
        values.toggle_topping("2", true);
        values.toggle_topping("3", true);
        assert_eq!(values.toppings, ["1", "2", "3"]);
        //removal does not reorder the survivors
        values.toggle_topping("2", false);
        assert_eq!(values.toppings, ["1", "3"]);
    }

    #[test]
    fn test_toggle_topping_round_trip() {
        let mut values = FormValues::default();
        values.toggle_topping("1", true);
        let before = values.clone();
        //checking twice adds only once
        values.toggle_topping("4", true);
        values.toggle_topping("4", true);
        assert_eq!(values.toppings, ["1", "4"]);
        //on/off returns to the prior set
        values.toggle_topping("4", false);
        assert_eq!(values, before);
    }

    #[test]
    fn test_edit_field_tracks_errors_and_enabled() {
        let form = OrderForm::new(OrderSchema::standard());
        assert!(!form.enabled.get_untracked());

        form.edit_field(Field::FullName, "Al".to_string());
        form.edit_field(Field::Size, "M".to_string());
        assert_eq!(
            form.errors.get_untracked().full_name,
            crate::schema::FULL_NAME_TOO_SHORT
        );
        assert_eq!(form.errors.get_untracked().size, "");
        assert!(!form.enabled.get_untracked());

        form.edit_field(Field::FullName, "Alice Smith".to_string());
        assert_eq!(form.errors.get_untracked().full_name, "");
        assert!(form.enabled.get_untracked());

        //toppings never gate submission
        form.toggle_topping("1", true);
        form.toggle_topping("3", true);
        assert!(form.enabled.get_untracked());
    }

    #[test]
    fn test_reset_leaves_errors_to_recomputation() {
        let form = OrderForm::new(OrderSchema::standard());
        form.edit_field(Field::FullName, "Al".to_string());
        form.toggle_topping("2", true);
        form.reset_values();
        assert_eq!(form.values.get_untracked(), FormValues::default());
        assert!(!form.enabled.get_untracked());
        //errors are only refreshed by the next change event
        assert_eq!(
            form.errors.get_untracked().full_name,
            crate::schema::FULL_NAME_TOO_SHORT
        );
    }

    #[test]
    fn test_notes_are_mutually_exclusive() {
        let form = OrderForm::new(OrderSchema::standard());
        form.record_note(ServerNote::Success("Order placed".to_string()));
        assert_eq!(
            form.server_note.get_untracked(),
            Some(ServerNote::Success("Order placed".to_string()))
        );
        form.record_note(ServerNote::Failure("Out of stock".to_string()));
        assert_eq!(
            form.server_note.get_untracked(),
            Some(ServerNote::Failure("Out of stock".to_string()))
        );
    }

    #[test]
    fn test_stale_reply_overwrites_newer_note() {
        // There is no cancellation of in-flight submits: whichever reply
        // lands last wins, even if it belongs to an older attempt.
        let form = OrderForm::new(OrderSchema::standard());
        form.record_note(ServerNote::Success("second attempt placed".to_string()));
        form.record_note(ServerNote::Failure("first attempt rejected".to_string()));
        assert_eq!(
            form.server_note.get_untracked(),
            Some(ServerNote::Failure("first attempt rejected".to_string()))
        );
    }
}
