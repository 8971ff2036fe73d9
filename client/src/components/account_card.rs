//! Static account summaries shown on the profile page.

#[cfg(test)]
#[path = "account_card_test.rs"]
mod account_card_test;

use leptos::prelude::*;

/// One account row. Balances are display strings; nothing here is live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub title: &'static str,
    pub amount: &'static str,
    pub description: &'static str,
}

pub const ACCOUNTS: &[Account] = &[
    Account { title: "Argent Bank Checking (x8349)", amount: "$2,082.79", description: "Available Balance" },
    Account { title: "Argent Bank Savings (x6712)", amount: "$10,928.42", description: "Available Balance" },
    Account { title: "Argent Bank Credit Card (x8349)", amount: "$184.30", description: "Current Balance" },
];

#[component]
pub fn AccountCard(account: Account) -> impl IntoView {
    view! {
        <section class="account">
            <div class="account-content-wrapper">
                <h3 class="account-title">{account.title}</h3>
                <p class="account-amount">{account.amount}</p>
                <p class="account-amount-description">{account.description}</p>
            </div>
            <div class="account-content-wrapper cta">
                <button class="transaction-button">"View transactions"</button>
            </div>
        </section>
    }
}
