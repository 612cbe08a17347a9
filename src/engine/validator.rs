//! Order admission checks.
//!
//! ## Validation Rules
//!
//! Applied in this order; the first failure aborts creation:
//!
//! 1. Sell and buy tokens must differ
//! 2. Both amounts must be positive
//! 3. The maker's allowance on the sell token, granted to the swap, must
//!    cover the sell amount
//!
//! Validation only reads ledger state. Funds are not moved or reserved: the
//! allowance is checked again, implicitly, when the order settles.

use tracing::debug;

use crate::error::{AllowanceError, Result, ValidationError};
use crate::token::TokenLedger;
use crate::types::{Address, OrderParams};

/// Stateless order validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderValidator;

impl OrderValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every admission check for an order `maker` wants to create.
    ///
    /// `spender` is the swap's own identity, the account the allowance must
    /// have been granted to.
    pub fn validate<L>(
        &self,
        ledger: &L,
        params: &OrderParams,
        maker: Address,
        spender: Address,
    ) -> Result<()>
    where
        L: TokenLedger + ?Sized,
    {
        self.check_pair(params)?;
        self.check_amounts(params)?;
        self.check_allowance(ledger, params, maker, spender)
    }

    /// Sell and buy tokens must be different assets
    pub fn check_pair(&self, params: &OrderParams) -> Result<()> {
        if params.sell_token == params.buy_token {
            return Err(ValidationError::SameToken.into());
        }
        Ok(())
    }

    /// Both sides must trade a positive quantity
    pub fn check_amounts(&self, params: &OrderParams) -> Result<()> {
        if params.sell_amount == 0 || params.buy_amount == 0 {
            return Err(ValidationError::ZeroAmount.into());
        }
        Ok(())
    }

    /// The maker must have pre-authorized the swap for the sell amount
    pub fn check_allowance<L>(
        &self,
        ledger: &L,
        params: &OrderParams,
        maker: Address,
        spender: Address,
    ) -> Result<()>
    where
        L: TokenLedger + ?Sized,
    {
        let allowance = ledger.allowance(params.sell_token, maker, spender)?;
        debug!(%maker, token = %params.sell_token, allowance, required = params.sell_amount, "allowance check");

        if allowance < params.sell_amount {
            return Err(AllowanceError::InsufficientAllowance.into());
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
