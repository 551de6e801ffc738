use anyhow::Result;
use clap::{App, AppSettings, Arg, SubCommand};
use inkstone::config::Config;
use inkstone::feed::{write_feed, FeedConfig};
use inkstone::store::Store;
use inkstone::tag;
use std::fs::File;
use std::path::Path;

fn main() -> Result<()> {
    let matches = App::new("inkstone")
        .about("The content fixtures and lookup core behind my personal blog")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("project")
                .short("C")
                .long("project")
                .takes_value(true)
                .help("Project directory (defaults to the current directory)"),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Load every content document and report what was found"),
        )
        .subcommand(
            SubCommand::with_name("article")
                .about("Look up an article by id")
                .arg(Arg::with_name("id").required(true)),
        )
        .subcommand(
            SubCommand::with_name("feed")
                .about("Write the Atom feed")
                .arg(Arg::with_name("output").required(true)),
        )
        .get_matches();

    let project = Path::new(matches.value_of("project").unwrap_or(".")).canonicalize()?;
    let config = Config::from_directory(&project)?;
    let store = Store::load(&config.content_directory)?;

    match matches.subcommand() {
        ("check", _) => check(&store),
        ("article", Some(sub)) => {
            let id: u64 = sub.value_of("id").unwrap().parse()?;
            match store.article_by_id(id) {
                Some(article) => {
                    println!("{}\t{}\t{}", article.id, article.create_time, article.title)
                }
                None => {
                    eprintln!("no article with id {}", id);
                    std::process::exit(1);
                }
            }
        }
        ("feed", Some(sub)) => write_feed(
            FeedConfig {
                title: config.title,
                id: config.site_root.to_string(),
                author: config.author,
                home_page: config.site_root.clone(),
            },
            &store.timeline,
            File::create(sub.value_of("output").unwrap())?,
        )?,
        _ => unreachable!(),
    }

    Ok(())
}

fn check(store: &Store) {
    let articles = store.timeline.articles().count();
    println!(
        "{} articles across {} years",
        articles,
        store.timeline.years().len()
    );
    println!("{} tags", tag::index_articles(&store.timeline).len());
    println!("{} albums, {} galleries", store.albums.len(), store.gallery.len());
    println!("{} comments", store.comments.len());
    println!("{} essays", store.essays.len());
    println!("{} friend links", store.friends.len());
}
