// src/cli/funds.rs — `embedscope funds`

use crate::client::ScoringBackend;
use crate::playground::FundsAccount;

pub async fn run_funds(backend: &dyn ScoringBackend) -> anyhow::Result<()> {
    let account = backend.remaining_funds().await?;
    print!("{}", format_funds(&account));
    Ok(())
}

pub fn format_funds(account: &FundsAccount) -> String {
    let mut out = format!(
        "funds:     ${:.2}\nspent:     ${:.2}\nremaining: ${:.2}\n",
        account.funds,
        account.costs_incurred,
        account.remaining()
    );
    if account.is_exhausted() {
        out.push_str("The service budget is used up; scoring requests will likely fail.\n");
    }
    out
}
