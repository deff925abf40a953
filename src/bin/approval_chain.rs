// Chain of Responsibility demo: purchase requests walking the approval chain.

use colored::Colorize;
use design_patterns::approval::{ApprovalChain, ApprovalOutcome};

fn main() {
    let chain = ApprovalChain::purchase_approvals();

    for amount in [500, 3_000, 7_000, -10] {
        println!("{}", format!("Purchase request for ${amount}:").bold());

        let outcome = chain.submit(amount);
        let line = match outcome {
            ApprovalOutcome::Approved { .. } => outcome.to_string().green(),
            ApprovalOutcome::Rejected { .. } => outcome.to_string().red(),
            ApprovalOutcome::NothingToApprove => outcome.to_string().yellow(),
        };
        println!("{line}\n");
    }
}
