//! Inspecting issues when a form is rejected.

use models::FormData;
use services::{parse, ParseOutcome};

fn main() {
    // Repeated keys are never merged or overwritten
    let mut form = FormData::new();
    form.append("role", "admin");
    form.append("role", "user");

    let issues = match parse(&form) {
        ParseOutcome::Success(_) => unreachable!("duplicate keys are always rejected"),
        ParseOutcome::Failure(issues) => issues,
    };

    println!("validation failed");
    for issue in &issues {
        // Issues are data; formatting belongs to the caller
        println!(
            "{}",
            serde_json::json!({ "code": issue.code(), "path": issue.path(), "key": issue.key() })
        );
        println!("  {}", issue);
    }

    // Typically: log the issues and answer 400
    std::process::exit(1);
}
