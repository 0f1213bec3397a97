use crate::models::Task;

pub fn print_task(t: &Task) {
    println!("Task: {}", t.name());
    println!("  Category: {}", t.category());
    println!("  Description: {}", t.description());
    println!("  Priority: {}", t.priority());
    println!("  Deadline: {}", t.deadline());
    if let Some(email) = t.email() {
        println!("  Contact: {email}");
    }
    println!("  Status: {}", t.status_str());
}

pub fn print_task_list(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for (i, t) in tasks.iter().enumerate() {
        let contact = t.email().map(|e| format!(" @{e}")).unwrap_or_default();
        println!(
            "  {}. [{}] {} ({}) p={} due {}{}",
            i + 1,
            if t.is_done() { "x" } else { " " },
            t.name(),
            t.category(),
            t.priority(),
            t.deadline(),
            contact
        );
    }
}
