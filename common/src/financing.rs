use serde::{Deserialize, Serialize};

use crate::listing::Listing;

/// Loan tenures offered in the payment dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    TenYears,
    TwentyYears,
    ThirtyYears,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 3] = [LoanTerm::TenYears, LoanTerm::TwentyYears, LoanTerm::ThirtyYears];

    pub fn years(self) -> u32 {
        match self {
            LoanTerm::TenYears => 10,
            LoanTerm::TwentyYears => 20,
            LoanTerm::ThirtyYears => 30,
        }
    }

    pub fn from_years(years: u32) -> Option<Self> {
        LoanTerm::ALL.into_iter().find(|t| t.years() == years)
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = String;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        LoanTerm::from_years(years).ok_or_else(|| format!("unsupported loan term: {years} years"))
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> u32 {
        term.years()
    }
}

/// Down payment share and interest rate applied to every quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Fraction of the price paid up front (0.0 - 1.0).
    pub down_payment_ratio: f64,
    pub annual_rate_percent: f64,
}

impl Default for FinancingTerms {
    fn default() -> Self {
        Self {
            down_payment_ratio: 0.30,
            annual_rate_percent: 8.0,
        }
    }
}

/// Breakdown of a financed purchase. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingQuote {
    pub total_price: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub term_months: u32,
    pub monthly_installment: f64,
}

impl FinancingQuote {
    pub fn for_listing(listing: &Listing, terms: FinancingTerms, term: LoanTerm) -> Self {
        quote(
            listing.numeric_price() as f64,
            terms.down_payment_ratio,
            terms.annual_rate_percent,
            term.years(),
        )
    }

    /// Sum of all installments over the term.
    pub fn total_repayment(&self) -> f64 {
        self.monthly_installment * self.term_months as f64
    }

    pub fn total_interest(&self) -> f64 {
        self.total_repayment() - self.loan_amount
    }
}

/// Equal monthly installment quote for an amortizing loan.
///
/// `monthly_installment = P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly
/// rate and `n` the number of months. A zero rate spreads the principal evenly;
/// a zero term makes the whole loan due at once.
pub fn quote(
    total_price: f64,
    down_payment_ratio: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> FinancingQuote {
    let down_payment = total_price * down_payment_ratio;
    let loan_amount = total_price - down_payment;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let term_months = term_years.saturating_mul(12);

    let monthly_installment = if term_months == 0 {
        loan_amount
    } else if monthly_rate == 0.0 {
        loan_amount / term_months as f64
    } else {
        let growth = (1.0 + monthly_rate).powf(term_months as f64);
        loan_amount * monthly_rate * growth / (growth - 1.0)
    };

    FinancingQuote {
        total_price,
        down_payment,
        loan_amount,
        monthly_rate,
        term_months,
        monthly_installment,
    }
}
