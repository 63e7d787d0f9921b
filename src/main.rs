//! shelfctl - interactive terminal client for the school library backend

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelfctl::{
    client::{Backend, HttpBackend},
    config::AppConfig,
    controller::{BooksController, ConfirmPrompt, StudentsController},
    ui::{render, TermPrompt},
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Collection to open at startup
    #[arg(long, value_enum, default_value = "books")]
    resource: Resource,

    /// Override the backend base URL from configuration
    #[arg(long)]
    backend_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Resource {
    Books,
    Students,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let mut config = AppConfig::load().expect("Failed to load configuration");

    let args = Args::parse();
    if let Some(url) = args.backend_url.clone() {
        config.backend.base_url = url;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shelfctl={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting shelfctl v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend at {}", config.backend.base_url);

    let backend = HttpBackend::new(&config.backend)?;
    let mut books = BooksController::new(backend.clone());
    let mut students = StudentsController::new(backend);
    let prompt = TermPrompt;
    let mut resource = args.resource;

    // Initial load, as the page does on mount
    match resource {
        Resource::Books => books.refresh().await,
        Resource::Students => students.refresh().await,
    }
    print_view(resource, &books, &students);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let (command, rest) = split_command(&input);

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help(resource);
                continue;
            }
            "books" => {
                resource = Resource::Books;
                books.refresh().await;
            }
            "students" => {
                resource = Resource::Students;
                students.refresh().await;
            }
            _ => match resource {
                Resource::Books => {
                    handle_books_command(&mut books, &prompt, command, rest).await
                }
                Resource::Students => {
                    handle_students_command(&mut students, command, rest).await
                }
            },
        }

        print_view(resource, &books, &students);
    }

    Ok(())
}

/// Split an input line into the command word and its argument text.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn print_view<B: Backend>(
    resource: Resource,
    books: &BooksController<B>,
    students: &StudentsController<B>,
) {
    let view = match resource {
        Resource::Books => render::books_view(books),
        Resource::Students => render::students_view(students),
    };
    println!("{}", view);
}

fn print_help(resource: Resource) {
    match resource {
        Resource::Books => {
            println!("book commands:");
            println!("  list                      fetch the book list");
            println!("  search <author>           fetch books by one author");
            println!("  reset                     clear the filter and refetch");
            println!("  get <id>                  fetch one book by id");
            println!("  title <text>              set the new-book title field");
            println!("  author <text>             set the new-book author field");
            println!("  add                       submit the new-book form");
            println!("  edit <id>                 start editing a listed book");
            println!("  etitle <text>             set the edit title field");
            println!("  eauthor <text>            set the edit author field");
            println!("  save                      submit the edit form");
            println!("  cancel                    leave edit mode");
            println!("  delete <id>               delete a book (asks first)");
            println!("  borrow <student> <book>   record a borrow");
            println!("  students                  switch to the student page");
        }
        Resource::Students => {
            println!("student commands:");
            println!("  list                      fetch the student list");
            println!("  name <text>               set the new-student name field");
            println!("  add                       submit the new-student form");
            println!("  borrowed <id>             list a student's borrowed books");
            println!("  books                     switch to the book page");
        }
    }
    println!("  help | quit");
}

async fn handle_books_command<B: Backend>(
    controller: &mut BooksController<B>,
    prompt: &dyn ConfirmPrompt,
    command: &str,
    rest: &str,
) {
    match command {
        "list" => controller.refresh().await,
        "search" => {
            controller.set_search_author(rest);
            controller.refresh().await;
        }
        "reset" => controller.reset_search().await,
        "get" => {
            if !rest.is_empty() {
                controller.set_lookup_id(rest);
            }
            controller.fetch_by_id().await;
        }
        "title" => controller.set_new_title(rest),
        "author" => controller.set_new_author(rest),
        "add" => controller.create().await,
        "edit" => match rest.parse() {
            Ok(id) => controller.begin_edit(id),
            Err(_) => println!("usage: edit <id>"),
        },
        "etitle" => controller.set_edit_title(rest),
        "eauthor" => controller.set_edit_author(rest),
        "save" => controller.update().await,
        "cancel" => controller.cancel_edit(),
        "delete" => match rest.parse() {
            Ok(id) => controller.delete(id, prompt).await,
            Err(_) => println!("usage: delete <id>"),
        },
        "borrow" => {
            let mut parts = rest.split_whitespace();
            let student_id = parts.next().and_then(|s| s.parse().ok());
            let book_id = parts.next().and_then(|s| s.parse().ok());
            match (student_id, book_id) {
                (Some(student_id), Some(book_id)) => {
                    if let Some(message) = controller.borrow(student_id, book_id).await {
                        println!("{}", message);
                    }
                }
                _ => println!("usage: borrow <student-id> <book-id>"),
            }
        }
        other => println!("unknown command: {} (try help)", other),
    }
}

async fn handle_students_command<B: Backend>(
    controller: &mut StudentsController<B>,
    command: &str,
    rest: &str,
) {
    match command {
        "list" => controller.refresh().await,
        "name" => controller.set_new_name(rest),
        "add" => controller.create().await,
        "borrowed" => match rest.parse() {
            Ok(id) => {
                if let Some(borrowed) = controller.borrowed_books(id).await {
                    if borrowed.is_empty() {
                        println!("No borrowed books.");
                    }
                    for book in &borrowed {
                        println!("{}", render::book_row(book));
                    }
                }
            }
            Err(_) => println!("usage: borrowed <id>"),
        },
        other => println!("unknown command: {} (try help)", other),
    }
}
