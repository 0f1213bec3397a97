use serde_json::{json, Value};
use tracing::warn;

use crate::cli::commands::{AddArgs, Commands, EditArgs};
use crate::config::Config;
use crate::error::TaskbookError;
use crate::logic::{
    AddTaskCommand, Command, DeleteTaskCommand, EditTaskCommand, EditTaskDescriptor,
    FilterTaskCommand, FilterTaskDescriptor, ListTasksCommand, MarkTaskCommand, TaskIndex,
};
use crate::model::TaskModel;
use crate::models::{Description, Email, Priority, Task, TaskCategory, TaskDeadline, TaskName};
use crate::output;
use crate::storage;

pub fn run(cmd: Commands, config: &Config) -> i32 {
    match run_inner(cmd, config) {
        Ok(code) => code,
        Err(e) => {
            warn!(code = e.code.as_str(), "command rejected: {}", e.message);
            if config.json {
                print_json(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(cmd: Commands, config: &Config) -> Result<i32, TaskbookError> {
    // Parse everything before touching the file
    let command = build_command(cmd)?;

    let mut model = TaskModel::new(storage::load_tasks(&config.file)?)?;
    let result = command.execute(&mut model)?;
    if command.mutates() {
        storage::save_tasks(&config.file, model.tasks())?;
    }

    let visible = model.filtered_task_list();
    if config.json {
        let mut data = json!({ "message": result.feedback });
        if let Some(ref task) = result.task {
            data["task"] = output::json::task_json(task);
        }
        if let Some(count) = result.tasks_listed {
            data["count"] = json!(count);
            data["tasks"] = output::json::task_list_json(&visible);
        }
        print_json(&output::json::success(data));
    } else {
        println!("{}", result.feedback);
        if let Some(ref task) = result.task {
            output::text::print_task(task);
        }
        if result.tasks_listed.is_some() {
            output::text::print_task_list(&visible);
        }
    }
    Ok(0)
}

fn build_command(cmd: Commands) -> Result<Box<dyn Command>, TaskbookError> {
    let command: Box<dyn Command> = match cmd {
        Commands::Add(args) => Box::new(AddTaskCommand::new(parse_task(args)?)),
        Commands::List { sort_by_status } => Box::new(ListTasksCommand::new(sort_by_status)),
        Commands::Edit(args) => {
            let index = TaskIndex::from_one_based(args.index)?;
            Box::new(EditTaskCommand::new(index, parse_edit(args)?)?)
        }
        Commands::Filter { category, deadline } => {
            let mut descriptor = FilterTaskDescriptor::new();
            if let Some(c) = category {
                descriptor = descriptor.with_category(TaskCategory::parse(&c)?);
            }
            if let Some(d) = deadline {
                descriptor = descriptor.with_date(TaskDeadline::parse(&d)?);
            }
            Box::new(FilterTaskCommand::new(descriptor)?)
        }
        Commands::Delete { index } => Box::new(DeleteTaskCommand::new(TaskIndex::from_one_based(index)?)),
        Commands::Mark { index } => Box::new(MarkTaskCommand::mark(TaskIndex::from_one_based(index)?)),
        Commands::Unmark { index } => Box::new(MarkTaskCommand::unmark(TaskIndex::from_one_based(index)?)),
    };
    Ok(command)
}

fn parse_task(args: AddArgs) -> Result<Task, TaskbookError> {
    Ok(Task::new(
        TaskName::new(&args.name)?,
        TaskCategory::parse(&args.category)?,
        Description::new(&args.description)?,
        Priority::parse(&args.priority)?,
        TaskDeadline::parse(&args.deadline)?,
        args.email.as_deref().map(Email::new).transpose()?,
        false,
    ))
}

fn parse_edit(args: EditArgs) -> Result<EditTaskDescriptor, TaskbookError> {
    let mut d = EditTaskDescriptor::new();
    if let Some(name) = args.name {
        d = d.with_name(TaskName::new(name)?);
    }
    if let Some(category) = args.category {
        d = d.with_category(TaskCategory::parse(&category)?);
    }
    if let Some(description) = args.description {
        d = d.with_description(Description::new(description)?);
    }
    if let Some(priority) = args.priority {
        d = d.with_priority(Priority::parse(&priority)?);
    }
    if let Some(deadline) = args.deadline {
        d = d.with_deadline(TaskDeadline::parse(&deadline)?);
    }
    if let Some(email) = args.email {
        d = d.with_email(Some(Email::new(email)?));
    } else if args.clear_email {
        d = d.with_email(None);
    }
    if args.done {
        d = d.with_done(true);
    } else if args.undone {
        d = d.with_done(false);
    }
    Ok(d)
}

fn print_json(v: &Value) {
    println!("{v:#}");
}
