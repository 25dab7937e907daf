//! new command - Write a dated post and run post-creation hooks

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDateTime};

use crate::cli::Context;
use crate::core::config::Config;
use crate::core::paths::SitePaths;
use crate::core::post::{write_post, NewPost};
use crate::core::types::Title;
use crate::hooks::{EditorCommand, EditorHook, GitAddHook, HookChain};
use crate::ui::output;

/// Flags of the new command that are not part of [`Context`].
#[derive(Debug, Clone, Default)]
pub struct NewPostOptions {
    /// Editor command override
    pub editor: Option<String>,
    /// Skip the editor hook
    pub no_edit: bool,
    /// Stage the post with git
    pub git_add: bool,
}

/// Create a post dated now (local time), using the config found for the
/// context's root.
///
/// Returns the path of the written post.
pub fn new_post(ctx: &Context, words: &[String], options: &NewPostOptions) -> Result<PathBuf> {
    let title = Title::from_words(words)
        .context("Please provide a post title (usage: newpost <TITLE>...)")?;

    let root = ctx.root();
    let config = Config::load(Some(root.as_path())).context("Failed to load configuration")?;

    new_post_with(ctx, title, options, &config, Local::now().naive_local())
}

/// Create a post dated `now` with an already loaded config.
///
/// # Steps
///
/// 1. Write `<posts_dir>/<YYYY-MM-DD>-<slug>.md`, replacing any existing file
/// 2. Run hooks: editor unless disabled, then git add if enabled
pub fn new_post_with(
    ctx: &Context,
    title: Title,
    options: &NewPostOptions,
    config: &Config,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    let verbosity = ctx.verbosity();
    let root = ctx.root();
    output::debug(format!("site root: {}", root.display()), verbosity);
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.site_config_loaded_from() {
        output::debug(format!("site config: {}", path.display()), verbosity);
    }

    let paths = SitePaths::new(&root, config.posts_dir());
    let post = NewPost::new(title, now).with_layout(config.layout());
    output::debug(format!("slug: '{}'", post.slug()), verbosity);

    let written = write_post(&paths, &post).context("Failed to create post")?;
    if written.replaced {
        output::warn(
            format!("replaced existing post {}", written.path.display()),
            verbosity,
        );
    }
    output::success(format!("Created {}", written.path.display()), verbosity);

    let mut hooks = HookChain::new();
    if !options.no_edit {
        let explicit = options.editor.as_deref().or(config.editor());
        let line = config.cursor_line().unwrap_or(written.body_line);
        hooks.push(EditorHook::new(EditorCommand::from_env(explicit), line));
    }
    if options.git_add || config.git_add() {
        hooks.push(GitAddHook);
    }
    if !hooks.is_empty() {
        output::debug(
            format!("hooks:\n{}", output::format_list(&hooks.names(), "  - ")),
            verbosity,
        );
    }

    let reports = hooks
        .run(&written.path)
        .context("Post-creation hook failed")?;
    for report in reports.iter().filter(|r| !r.outcome.success) {
        let detail = report.outcome.detail.as_deref().unwrap_or("no details");
        output::warn(format!("{}: {}", report.name, detail), verbosity);
    }

    Ok(written.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    fn jan_second() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(10, 11, 12)
            .unwrap()
    }

    fn site() -> (TempDir, Context) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("_posts")).unwrap();
        let ctx = Context {
            root: Some(temp.path().to_path_buf()),
            quiet: true,
            ..Default::default()
        };
        (temp, ctx)
    }

    /// Run with the site config under the root and no global config.
    fn create(ctx: &Context, title: &str, options: &NewPostOptions) -> Result<PathBuf> {
        let config = Config::load_from(None, Some(ctx.root().as_path()))?;
        let title = Title::from_words(&words(title)).unwrap();
        new_post_with(ctx, title, options, &config, jan_second())
    }

    fn no_edit() -> NewPostOptions {
        NewPostOptions {
            no_edit: true,
            ..Default::default()
        }
    }

    #[test]
    fn creates_dated_post() {
        let (temp, ctx) = site();

        let path = create(&ctx, "My First Post", &no_edit()).unwrap();

        assert_eq!(path, temp.path().join("_posts/2024-01-02-my-first-post.md"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("title: My First Post\n"));
        assert!(contents.contains("layout: post\n"));
        assert!(contents.contains("date: 2024-01-02 10:11:12\n"));
    }

    #[test]
    fn empty_title_writes_nothing() {
        let (temp, ctx) = site();

        let err = new_post(&ctx, &[], &no_edit()).unwrap_err();

        assert!(format!("{:#}", err).contains("post title"));
        assert_eq!(fs::read_dir(temp.path().join("_posts")).unwrap().count(), 0);
    }

    #[test]
    fn missing_posts_dir_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = Context {
            root: Some(temp.path().to_path_buf()),
            quiet: true,
            ..Default::default()
        };

        assert!(create(&ctx, "Hello", &no_edit()).is_err());
        assert!(!temp.path().join("_posts").exists());
    }

    #[test]
    fn site_config_applies() {
        let (temp, ctx) = site();
        fs::create_dir_all(temp.path().join("blog/posts")).unwrap();
        fs::write(
            temp.path().join(".newpost.toml"),
            "posts_dir = \"blog/posts\"\nlayout = \"article\"\n",
        )
        .unwrap();

        let path = create(&ctx, "Hi", &no_edit()).unwrap();

        assert_eq!(path, temp.path().join("blog/posts/2024-01-02-hi.md"));
        assert!(fs::read_to_string(path).unwrap().contains("layout: article\n"));
    }

    #[cfg(unix)]
    #[test]
    fn editor_hook_runs() {
        let (_temp, ctx) = site();
        let options = NewPostOptions {
            editor: Some("true".to_string()),
            ..Default::default()
        };

        assert!(create(&ctx, "Edited", &options).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn editor_launch_failure_is_fatal() {
        let (_temp, ctx) = site();
        let options = NewPostOptions {
            editor: Some("newpost-no-such-editor".to_string()),
            ..Default::default()
        };

        let err = create(&ctx, "Edited", &options).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to launch"));
    }

    #[test]
    fn global_config_comes_from_caller() {
        let (temp, ctx) = site();
        git2::Repository::init(temp.path()).unwrap();
        let global = temp.path().join("global.toml");
        fs::write(&global, "git_add = true\n").unwrap();
        let config = Config::load_from(Some(global.as_path()), Some(temp.path())).unwrap();
        let title = Title::from_words(&words("From Config")).unwrap();

        let path = new_post_with(&ctx, title, &no_edit(), &config, jan_second()).unwrap();

        let git = crate::git::Git::open(&path).unwrap();
        assert!(git.is_staged(&path).unwrap());
    }

    #[test]
    fn git_add_stages_post() {
        let (temp, ctx) = site();
        git2::Repository::init(temp.path()).unwrap();
        let options = NewPostOptions {
            no_edit: true,
            git_add: true,
            ..Default::default()
        };

        let path = create(&ctx, "Staged", &options).unwrap();

        let git = crate::git::Git::open(&path).unwrap();
        assert!(git.is_staged(&path).unwrap());
    }
}
