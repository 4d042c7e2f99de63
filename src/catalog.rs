/// One selectable topping: a stable wire identifier plus its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub text: &'static str,
}

/// Ordered, read-only list of the toppings the kitchen offers. Reference
/// data, not user state; owned by the page for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ToppingCatalog {
    toppings: Vec<Topping>,
}

impl ToppingCatalog {
    pub fn standard() -> ToppingCatalog {
        ToppingCatalog {
            toppings: vec![
                Topping { id: "1", text: "Pepperoni" },
                Topping { id: "2", text: "Green Peppers" },
                Topping { id: "3", text: "Pineapple" },
                Topping { id: "4", text: "Mushrooms" },
                Topping { id: "5", text: "Ham" },
            ],
        }
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }
}
