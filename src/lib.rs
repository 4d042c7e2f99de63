use leptos::prelude::*;

mod catalog;
mod form;
mod frontend;
mod schema;
mod submit;

/// Hold logical items of the order page
#[derive(Debug)]
pub struct Website {
    // Reactive form state driven by user input
    pub form: form::OrderForm,
    // Immutable reference data owned for the page's lifetime
    pub catalog: catalog::ToppingCatalog,
}

impl Default for Website {
    fn default() -> Self {
        Website {
            form: form::OrderForm::new(schema::OrderSchema::standard()),
            catalog: catalog::ToppingCatalog::standard(),
        }
    }
}

impl Website {
    pub fn app() -> impl IntoView {
        let website = Website::default();

        view! { <frontend::OrderPage form=website.form catalog=website.catalog /> }
    }
}
