use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curriculum_store::config;
use curriculum_store::persist::SqliteBlobStore;
use curriculum_store::store::TaxonomyStore;

fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "curriculum_store=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_path = config::load_storage_path();
  if let Some(parent) = db_path.parent() {
    if let Err(e) = std::fs::create_dir_all(parent) {
      tracing::warn!("Failed to create data directory {}: {}", parent.display(), e);
    }
  }

  let blob = match SqliteBlobStore::open(&db_path) {
    Ok(blob) => blob,
    Err(e) => {
      tracing::error!("Failed to open taxonomy database {}: {}", db_path.display(), e);
      std::process::exit(1);
    }
  };
  let store = TaxonomyStore::load(blob);

  // Print the taxonomy tree: board, then stream/group, then class levels
  // for stream-structured boards.
  for board in store.boards() {
    println!("{board}");
    for stream_or_group in store.streams_or_groups(&board) {
      let class_levels = store.class_levels(&board, &stream_or_group);
      if class_levels.is_empty() {
        let subjects = store.subjects_flat(&board, &stream_or_group);
        println!("  {stream_or_group}: {}", subjects.join(", "));
      } else {
        println!("  {stream_or_group}");
        for class_level in class_levels {
          let subjects = store.subjects_nested(&board, &stream_or_group, &class_level);
          println!("    {class_level}: {}", subjects.join(", "));
        }
      }
    }
  }

  if let Some(selection) = store.selection() {
    match &selection.class_level {
      Some(class_level) => println!(
        "selected: {} / {} / {} / {}",
        selection.board, selection.stream_or_group, class_level, selection.subject
      ),
      None => println!(
        "selected: {} / {} / {}",
        selection.board, selection.stream_or_group, selection.subject
      ),
    }
  }
}
