use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::cart::{Cart, LineItem};
use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;
use crate::validation::{self, ValidationResult};

/// Observable resting state of the add flow. Resolution, schema validation,
/// and the commit all run synchronously inside a single event, so only the
/// states between events are observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No product is resolved from the name input.
    Idle,
    /// A product is resolved but the pending quantity does not pass the gate.
    Resolved,
    /// Product resolved and quantity positive; the submit action is offered.
    Ready,
}

/// Result of a submit event. No variant leaves the session partially
/// committed: either the line item landed and the inputs reset, or state is
/// exactly as it was before the event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Schema validation passed and the line item was added (merging by
    /// summed quantity when the product was already in the cart).
    Committed { line: LineItem, total: Decimal },
    /// Schema validation failed; the inputs are left as typed so they can be
    /// corrected, and the field errors are surfaced inline.
    Rejected(ValidationResult),
    /// Inputs passed the schema but the name matched no catalog product.
    /// Surfaced silently: the selection just stays cleared.
    NoMatch,
}

/// The explicit form-state struct: cart, resolved selection, and pending
/// inputs live together with defined reset points (commit and clear-all).
#[derive(Clone, Debug)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    item_input: String,
    count_input: String,
    resolved: Option<ProductId>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            item_input: String::new(),
            count_input: String::new(),
            resolved: None,
        }
    }

    /// Records a name keystroke and re-resolves the selection live. A lookup
    /// miss clears the selection without surfacing an error.
    pub fn input_item(&mut self, text: &str) {
        self.item_input = text.to_string();
        self.resolved = self.catalog.find_by_name(&self.item_input).map(|product| product.id);
    }

    pub fn input_count(&mut self, text: &str) {
        self.count_input = text.to_string();
    }

    pub fn item_input(&self) -> &str {
        &self.item_input
    }

    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    pub fn resolved_product(&self) -> Option<&Product> {
        self.resolved.as_ref().and_then(|id| self.catalog.find(id))
    }

    /// Submission gate: pure function of the current inputs, recomputed on
    /// every observation. True iff a product is resolved and the count field
    /// is non-empty, numeric, and greater than zero.
    pub fn can_submit(&self) -> bool {
        self.resolved.is_some() && validation::count_is_positive(&self.count_input)
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.resolved.is_some(), validation::count_is_positive(&self.count_input)) {
            (false, _) => SessionPhase::Idle,
            (true, false) => SessionPhase::Resolved,
            (true, true) => SessionPhase::Ready,
        }
    }

    /// Runs the submit event: schema validation, catalog resolution, commit.
    /// On success the inputs reset so the next entry starts from `Idle`.
    pub fn submit(&mut self) -> Result<SubmitOutcome, DomainError> {
        let result = validation::validate_submission(&self.item_input, &self.count_input);
        if !result.valid {
            return Ok(SubmitOutcome::Rejected(result));
        }
        let Some(quantity) = result.quantity else {
            return Ok(SubmitOutcome::Rejected(result));
        };

        // Resolution is re-run at submit time; the live selection only feeds
        // the gate.
        let Some(product) = self.catalog.find_by_name(&self.item_input).cloned() else {
            return Ok(SubmitOutcome::NoMatch);
        };

        let line = self.cart.add(&product, quantity)?;
        let total = self.cart.total();
        self.reset_inputs();
        Ok(SubmitOutcome::Committed { line, total })
    }

    /// Empties the cart and resets both inputs. Irreversible.
    pub fn clear_all(&mut self) {
        self.cart.clear();
        self.reset_inputs();
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn reset_inputs(&mut self) {
        self.item_input.clear();
        self.count_input.clear();
        self.resolved = None;
    }
}
