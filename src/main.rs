use structopt::StructOpt;

use garco::{fetch_catalog, BookmarkStore, FileStorage, LibraryIndex, DEFAULT_CATALOG_URL};

#[derive(StructOpt)]
#[structopt(about = "Browses a remote comic catalog from the command line")]
struct Cli {
    #[structopt(short, long, help = "Catalog JSON url (defaults to the built-in catalog)")]
    url: Option<String>,
    #[structopt(short, long, help = "Keep only series whose title contains this string")]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::from_args();

    let url = cli.url.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_owned());
    let volumes = fetch_catalog(&url).await;

    let index = LibraryIndex::build(&volumes, cli.search.as_deref().unwrap_or(""));
    if index.is_empty() {
        println!("Library empty.");
        return Ok(());
    }

    let bookmarks = BookmarkStore::new(FileStorage::in_data_dir()?);
    let saved = bookmarks.load();

    for group in &index.groups {
        println!("{}", group.letter);
        for series in &group.series {
            println!("  {}", series.title);
            for volume in &series.volumes {
                match saved.get(&volume.id) {
                    Some(bookmark) => println!(
                        "    {} ({} pages, at page {})",
                        volume.volume_number,
                        volume.pages.len(),
                        bookmark.page_index + 1
                    ),
                    None => println!(
                        "    {} ({} pages)",
                        volume.volume_number,
                        volume.pages.len()
                    ),
                }
            }
        }
    }

    Ok(())
}
