use std::fs;
use std::io::Read;
use std::path::Path;
use std::process;
use std::sync::Arc;

use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::{Dispatch, Level, dispatcher, error, warn};
use tracing_subscriber::fmt as tracing_fmt;

use cifra::application::error::AppError;
use cifra::application::feed::{self, PostQueryFilter};
use cifra::application::store::{NewPost, PostStore, StoreError};
use cifra::config::{self, Command, ListArgs, Settings, ShowArgs, TagsArgs, WriteArgs};
use cifra::domain::error::DomainError;
use cifra::domain::posts::{self, Post};
use cifra::domain::slug;
use cifra::infra::error::InfraError;
use cifra::infra::{storage::LocalDiskStorage, telemetry};

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging)?;

    let store = build_store(&settings)?;
    let command = cli_args.command.unwrap_or(Command::List(ListArgs::default()));

    match command {
        Command::List(args) => run_list(&store, args),
        Command::Show(args) => run_show(&store, args),
        Command::Write(args) => run_write(&store, *args),
        Command::Delete(args) => run_delete(&store, &args.id),
        Command::Tags(args) => run_tags(&store, args),
    }
}

fn build_store(settings: &Settings) -> Result<PostStore, AppError> {
    if settings.storage.detached {
        warn!("running detached: reads serve the built-in defaults, writes are rejected");
        return Ok(PostStore::detached());
    }

    let backend = LocalDiskStorage::new(&settings.storage.data_dir)?;
    Ok(PostStore::with_key(
        Arc::new(backend),
        settings.storage.key.clone(),
    ))
}

/// Read the collection for a viewing command.
///
/// A malformed document degrades to the built-in default set, read-only,
/// so browsing keeps working; authoring commands surface the error
/// instead of papering over it.
fn read_posts_degraded(store: &PostStore) -> Result<Vec<Post>, AppError> {
    match store.list_posts() {
        Ok(collection) => Ok(collection),
        Err(StoreError::Malformed { reason }) => {
            warn!(%reason, "post document is malformed; serving built-in defaults read-only");
            Ok(posts::default_posts())
        }
        Err(err) => Err(err.into()),
    }
}

fn run_list(store: &PostStore, args: ListArgs) -> Result<(), AppError> {
    let collection = read_posts_degraded(store)?;
    let filter = PostQueryFilter {
        search: args.search,
        tag: args.tag,
    };
    let selected = feed::filter_posts(&collection, &filter);

    if args.json {
        return print_json(&selected);
    }
    if selected.is_empty() {
        println!("no posts match the current filter");
        return Ok(());
    }
    for post in selected {
        println!(
            "{}  {}  [{}]  {} min",
            posts::format_human_date(post.date),
            post.title,
            post.tags.join(", "),
            post.read_time,
        );
        println!("    /blog/{}  id={}", post.slug, post.id);
    }
    Ok(())
}

fn run_show(store: &PostStore, args: ShowArgs) -> Result<(), AppError> {
    let found = match store.get_post(&args.slug) {
        Ok(found) => found,
        Err(StoreError::Malformed { reason }) => {
            warn!(%reason, "post document is malformed; serving built-in defaults read-only");
            posts::default_posts()
                .into_iter()
                .find(|post| post.slug == args.slug)
        }
        Err(err) => return Err(err.into()),
    };

    let Some(post) = found else {
        println!("post not found: {}", args.slug);
        return Ok(());
    };

    if args.json {
        return print_json(&post);
    }
    println!("# {}", post.title);
    println!(
        "{} · {} · {} min read",
        posts::format_human_date(post.date),
        post.author,
        post.read_time,
    );
    println!("tags: {}", post.tags.join(", "));
    println!("/blog/{}  id={}", post.slug, post.id);
    println!();
    println!("{}", post.content);
    Ok(())
}

fn run_write(store: &PostStore, args: WriteArgs) -> Result<(), AppError> {
    let title = args.title.trim().to_string();
    if title.is_empty() {
        return Err(DomainError::validation("post title must not be empty").into());
    }
    let content = read_content(args.content_file.as_deref())?;
    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(DomainError::validation("post content must not be empty").into());
    }

    let existing = store.list_posts()?;
    let slug = slug::generate_unique_slug(&title, |candidate| {
        !existing.iter().any(|post| post.slug == candidate)
    })?;
    let excerpt = match args.excerpt.as_deref().map(str::trim) {
        Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
        _ => posts::auto_excerpt(&content),
    };
    let read_time = posts::estimate_read_time(&content);
    let date = resolve_date(args.date.as_deref())?;

    let post = store.create_post(NewPost {
        title,
        slug,
        excerpt,
        content,
        author: posts::resolve_author(args.author.as_deref().unwrap_or_default()),
        date,
        tags: args.tags,
        read_time,
    })?;

    if args.json {
        return print_json(&post);
    }
    println!("published: {}", post.title);
    println!(
        "  /blog/{}  id={}  {} min read",
        post.slug, post.id, post.read_time,
    );
    Ok(())
}

fn run_delete(store: &PostStore, id: &str) -> Result<(), AppError> {
    store.delete_post(id)?;
    println!("deleted: {id}");
    Ok(())
}

fn run_tags(store: &PostStore, args: TagsArgs) -> Result<(), AppError> {
    let collection = read_posts_degraded(store)?;
    let tags = feed::known_tags(&collection);

    if args.json {
        return print_json(&tags);
    }
    for tag in tags {
        println!("{tag}");
    }
    Ok(())
}

fn read_content(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|err| InfraError::Io(err).into())
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| AppError::from(InfraError::Io(err)))?;
            Ok(buffer)
        }
    }
}

fn resolve_date(input: Option<&str>) -> Result<Date, AppError> {
    match input {
        Some(value) => Date::parse(value, posts::ISO_DATE_FORMAT).map_err(|_| {
            DomainError::validation(format!("publication date `{value}` is not YYYY-MM-DD")).into()
        }),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::unexpected(format!("failed to render output: {err}")))?;
    println!("{out}");
    Ok(())
}
