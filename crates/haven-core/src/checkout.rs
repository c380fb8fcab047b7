//! # Checkout Wizard
//!
//! The three-step checkout flow as a small state machine.
//!
//! ## Steps
//! ```text
//!   ┌──────────┐  next   ┌──────────┐  next   ┌──────────┐  submit  ┌──────────┐
//!   │ Shipping │ ──────► │ Payment  │ ──────► │  Review  │ ───────► │ Complete │
//!   │          │ ◄────── │          │ ◄────── │          │          │          │
//!   └──────────┘  back   └──────────┘  back   └──────────┘          └──────────┘
//! ```
//!
//! `next` validates the fields of the step being left. Submission is split
//! in two: [`Checkout::begin_submit`] checks the preconditions and marks the
//! wizard as processing, [`Checkout::complete`] finishes it once the caller
//! has recorded the order. The storefront waits its simulated payment delay
//! between the two.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, OrderStatus, TaxRate, User};
use crate::validation::{validate_email, validate_required, ValidationResult};

// =============================================================================
// Checkout Step
// =============================================================================

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Review,
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
            CheckoutStep::Complete => "complete",
        }
    }

    /// The step `next` moves to, if any. Review only advances by submitting.
    fn following(self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review | CheckoutStep::Complete => None,
        }
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// The shipping and payment form.
///
/// Card details are never stored beyond the wizard and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    // Shipping
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,

    // Payment
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// An empty form with name and email taken from the session user.
    pub fn prefilled(user: Option<&User>) -> Self {
        match user {
            Some(user) => CheckoutForm {
                full_name: user.name.clone(),
                email: user.email.clone(),
                ..Default::default()
            },
            None => CheckoutForm::default(),
        }
    }

    /// Validates the shipping section.
    pub fn validate_shipping(&self) -> ValidationResult<()> {
        validate_required("fullName", &self.full_name)?;
        validate_email(&self.email)?;
        validate_required("address", &self.address)?;
        validate_required("city", &self.city)?;
        validate_required("postalCode", &self.postal_code)?;
        validate_required("country", &self.country)?;
        Ok(())
    }

    /// Validates the payment section.
    pub fn validate_payment(&self) -> ValidationResult<()> {
        validate_required("cardNumber", &self.card_number)?;
        validate_required("cardName", &self.card_name)?;
        validate_required("expiryDate", &self.expiry_date)?;
        validate_required("cvv", &self.cvv)?;
        Ok(())
    }

    fn validate_step(&self, step: CheckoutStep) -> ValidationResult<()> {
        match step {
            CheckoutStep::Shipping => self.validate_shipping(),
            CheckoutStep::Payment => self.validate_payment(),
            CheckoutStep::Review | CheckoutStep::Complete => Ok(()),
        }
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// The checkout wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    step: CheckoutStep,
    form: CheckoutForm,
    processing: bool,
    /// Set once the order is placed; the address the confirmation went to.
    confirmation_email: Option<String>,
}

impl Checkout {
    /// Starts a fresh wizard, prefilled from the session user.
    pub fn new(user: Option<&User>) -> Self {
        Checkout {
            form: CheckoutForm::prefilled(user),
            ..Default::default()
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn confirmation_email(&self) -> Option<&str> {
        self.confirmation_email.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }

    /// Replaces the form contents. Not allowed once the order is placed.
    pub fn update_form(&mut self, form: CheckoutForm) -> CoreResult<()> {
        if self.is_complete() || self.processing {
            return Err(self.wrong_step("edit the form"));
        }
        self.form = form;
        Ok(())
    }

    /// Validates the current step and moves forward one step.
    pub fn next(&mut self) -> CoreResult<CheckoutStep> {
        let following = self
            .step
            .following()
            .ok_or_else(|| self.wrong_step("advance"))?;

        self.form.validate_step(self.step)?;
        self.step = following;
        Ok(self.step)
    }

    /// Moves back one step. Going back from shipping stays on shipping.
    pub fn back(&mut self) -> CoreResult<CheckoutStep> {
        self.step = match self.step {
            CheckoutStep::Shipping | CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Review if !self.processing => CheckoutStep::Payment,
            CheckoutStep::Review | CheckoutStep::Complete => {
                return Err(self.wrong_step("go back"));
            }
        };
        Ok(self.step)
    }

    /// Checks that an order can be placed and marks the wizard as processing.
    ///
    /// ## Errors
    /// - `InvalidCheckoutStep` unless at the review step and idle
    /// - `EmptyCart` when there is nothing to buy
    pub fn begin_submit(&mut self, cart: &Cart) -> CoreResult<()> {
        if self.step != CheckoutStep::Review || self.processing {
            return Err(self.wrong_step("submit"));
        }
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        self.processing = true;
        Ok(())
    }

    /// Finishes a submission started with [`Checkout::begin_submit`].
    pub fn complete(&mut self) {
        self.processing = false;
        self.step = CheckoutStep::Complete;
        self.confirmation_email = Some(self.form.email.trim().to_string());
    }

    fn wrong_step(&self, action: &str) -> CoreError {
        CoreError::InvalidCheckoutStep {
            current: self.step.as_str().to_string(),
            action: action.to_string(),
        }
    }
}

/// Builds the order record for a cart being checked out.
///
/// The total includes tax; shipping is free.
pub fn build_order(id: String, date: NaiveDate, cart: &Cart, tax_rate: TaxRate) -> Order {
    Order {
        id,
        date,
        items: cart.entries().iter().map(|e| e.to_order_item()).collect(),
        total: cart.totals(tax_rate).total,
        status: OrderStatus::Pending,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
