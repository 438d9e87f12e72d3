use clap::{Parser, Subcommand};
use notes_core::{open_store, Note, NoteChanges, NoteService, NotesConfig, SeedOutcome};

#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(about = "Notes service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// List all notes, newest first
    List,
    /// Create a note
    Create {
        /// Note title (at most 100 characters)
        title: String,
        /// Note content
        content: String,
    },
    /// Update the title and/or content of a note
    Update {
        /// Note ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New content
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
    /// Insert the default notes if the collection is empty
    Seed,
}

fn print_note(note: &Note) {
    println!(
        "ID: {}, Title: {}, Created: {}, Updated: {}",
        note.id,
        note.title,
        note.created_at.to_rfc3339(),
        note.updated_at.to_rfc3339()
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("Use 'notes --help' for commands");
        return Ok(());
    };

    let cfg = NotesConfig::from_env()?;
    let service = NoteService::new(open_store(&cfg));

    match command {
        Commands::List => match service.list_all().await {
            Ok(notes) if notes.is_empty() => println!("No notes found."),
            Ok(notes) => notes.iter().for_each(print_note),
            Err(e) => eprintln!("Error listing notes: {}", e),
        },
        Commands::Create { title, content } => match service.create(&title, &content).await {
            Ok(note) => println!("Created note with ID: {}", note.id),
            Err(e) => eprintln!("Error creating note: {}", e),
        },
        Commands::Update { id, title, content } => {
            match service.update(&id, NoteChanges { title, content }).await {
                Ok(note) => {
                    println!("Updated note:");
                    print_note(&note);
                }
                Err(e) => eprintln!("Error updating note: {}", e),
            }
        }
        Commands::Delete { id } => match service.delete(&id).await {
            Ok(()) => println!("Deleted note with ID: {}", id),
            Err(e) => eprintln!("Error deleting note: {}", e),
        },
        Commands::Seed => match service.seed_if_empty().await {
            Ok(SeedOutcome::Seeded(n)) => println!("Seeded {} default notes", n),
            Ok(SeedOutcome::AlreadyPopulated(count)) => {
                println!("Database already has {} notes, skipping seed", count)
            }
            Err(e) => eprintln!("Error seeding database: {}", e),
        },
    }

    Ok(())
}
