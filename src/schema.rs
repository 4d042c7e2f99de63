use crate::form::FormValues;

pub const FULL_NAME_TOO_SHORT: &str = "full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "full name must be at most 20 characters";
pub const SIZE_INCORRECT: &str = "size must be S or M or L";

/// The two schema-validated fields of the order form.
/// (Toppings carry no validation rule.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Size,
}

/// One declarative validation rule with its configured failure message.
/// Values are trimmed before every comparison, so an empty or
/// whitespace-only string always fails.
#[derive(Debug, Clone)]
enum Rule {
    MinLen {
        min: usize,
        message: &'static str,
    },
    MaxLen {
        max: usize,
        message: &'static str,
    },
    OneOf {
        allowed: &'static [&'static str],
        message: &'static str,
    },
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        match *self {
            Rule::MinLen { min, message } => {
                if value.chars().count() < min {
                    return Err(message);
                }
            }
            Rule::MaxLen { max, message } => {
                if value.chars().count() > max {
                    return Err(message);
                }
            }
            Rule::OneOf { allowed, message } => {
                if !allowed.iter().any(|option| *option == value) {
                    return Err(message);
                }
            }
        }
        Ok(())
    }
}

/// Declarative rule set for the order form, immutable for the lifetime of
/// the page.
#[derive(Debug, Clone)]
pub struct OrderSchema {
    full_name: Vec<Rule>,
    size: Vec<Rule>,
}

impl OrderSchema {
    pub fn standard() -> OrderSchema {
        OrderSchema {
            full_name: vec![
                Rule::MinLen {
                    min: 3,
                    message: FULL_NAME_TOO_SHORT,
                },
                Rule::MaxLen {
                    max: 20,
                    message: FULL_NAME_TOO_LONG,
                },
            ],
            size: vec![Rule::OneOf {
                allowed: &["S", "M", "L"],
                message: SIZE_INCORRECT,
            }],
        }
    }

    /// Checks one field's value in isolation
    ///
    /// Rules run in declaration order and the first failure wins
    ///
    /// # Parameters
    /// field: which form field the value belongs to
    /// value: the raw (untrimmed) value to check
    ///
    /// # Returns
    /// Ok(()) if every rule passes; Err with the configured message of the
    /// first failing rule otherwise
    pub fn check_field(&self, field: Field, value: &str) -> Result<(), &'static str> {
        let rules = match field {
            Field::FullName => &self.full_name,
            Field::Size => &self.size,
        };
        rules.iter().try_for_each(|rule| rule.check(value))
    }

    /// Decides if the whole value set currently validates (drives the
    /// submit control). Pure and idempotent; toppings are not consulted.
    pub fn validates(&self, values: &FormValues) -> bool {
        self.check_field(Field::FullName, &values.full_name).is_ok()
            && self.check_field(Field::Size, &values.size).is_ok()
    }
}
