//! Static gallery output.
//!
//! A build writes two files into the output directory:
//! - `index.html`: one section per story with its rendered preview and markup
//! - `meta.json`: the component schema plus a summary of each story

use std::fs;
use std::path::{Path, PathBuf};

use htmldom::{Element, to_html};
use serde::Serialize;
use slate::catalog::{ButtonArgs, Meta};
use slate::stories::{self, Story, StoryInfo};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

pub const INDEX_FILE: &str = "index.html";
pub const META_FILE: &str = "meta.json";

/// Contents of `meta.json`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogDocument {
    pub meta: Meta,
    pub stories: Vec<StoryInfo>,
}

/// Paths written by [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub index: PathBuf,
    pub meta: PathBuf,
    pub stories: usize,
}

/// Resolve story names (or ids) to stories, in catalog order.
///
/// An empty selection means every story.
pub fn select(names: &[String]) -> Result<Vec<Story>, CatalogError> {
    if let Some(unknown) = names.iter().find(|name| stories::find(name).is_none()) {
        return Err(CatalogError::UnknownStory(unknown.clone()));
    }
    Ok(stories::all()
        .into_iter()
        .filter(|story| names.is_empty() || names.iter().any(|name| story.matches(name)))
        .collect())
}

pub fn document(stories: &[Story]) -> CatalogDocument {
    CatalogDocument {
        meta: Meta::button(),
        stories: stories.iter().map(Story::info).collect(),
    }
}

/// Render the gallery page for `stories`.
pub fn page(title: &str, stories: &[Story]) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text_content(title));

    let body = Element::new("body").class("bg-background text-foreground").child(
        Element::new("main")
            .class("mx-auto flex max-w-5xl flex-col gap-12 p-8")
            .child(Element::new("h1").class("text-2xl font-semibold").text_content(title))
            .child(Element::new("p").text_content(slate::catalog::DESCRIPTION))
            .children(stories.iter().map(section)),
    );

    let html = Element::new("html").attr("lang", "en").child(head).child(body);
    format!("<!DOCTYPE html>\n{}\n", to_html(&html))
}

fn section(story: &Story) -> Element {
    let preview = story.render();
    let markup = to_html(&preview);

    let mut section = Element::new("section")
        .attr("id", story.id())
        .class("flex flex-col gap-4")
        .child(Element::new("h2").class("text-lg font-medium").text_content(story.name));
    if let Some(description) = story.description {
        section = section.child(Element::new("p").text_content(description));
    }
    section
        .child(
            Element::div()
                .class("story-canvas flex items-center justify-center rounded-md border p-8")
                .child(preview),
        )
        .child(Element::new("pre").child(Element::new("code").text_content(markup)))
}

/// Build the gallery described by `config`.
pub fn build(config: &CatalogConfig) -> Result<BuildReport, CatalogError> {
    let stories = select(&config.stories)?;
    log::info!(
        "[gallery] building {} stories into {}",
        stories.len(),
        config.out_dir.display()
    );

    fs::create_dir_all(&config.out_dir)?;

    let index = config.out_dir.join(INDEX_FILE);
    write(&index, &page(&config.title, &stories))?;

    let meta = config.out_dir.join(META_FILE);
    let json = serde_json::to_string_pretty(&document(&stories))?;
    write(&meta, &json)?;

    Ok(BuildReport {
        index,
        meta,
        stories: stories.len(),
    })
}

/// Render one story's HTML, applying `args` to args-driven stories.
pub fn render_story(name: &str, args: Option<&ButtonArgs>) -> Result<String, CatalogError> {
    let story = stories::find(name).ok_or_else(|| CatalogError::UnknownStory(name.to_string()))?;
    let element = match args {
        Some(args) => story.render_with(args),
        None => story.render(),
    };
    Ok(to_html(&element))
}

fn write(path: &Path, contents: &str) -> Result<(), CatalogError> {
    log::debug!("[gallery] writing {}", path.display());
    fs::write(path, contents).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}
