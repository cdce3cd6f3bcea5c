//! Interactive prompt sequence for `devmap new` without arguments.

use crate::catalog::{self, NewProject};
use crate::context::DevmapContext;
use crate::error::ApiError;
use crate::registry::Registry;
use dialoguer::{Confirm, Input, Select};

const NEW_LANGUAGE_ITEM: &str = "+ New language";
const NO_TEMPLATE_ITEM: &str = "(empty project)";

fn prompt_err(e: dialoguer::Error) -> ApiError {
    ApiError::Prompt(e.to_string())
}

/// Menu entries for the language step: known languages, then the "new" entry.
fn language_items(registry: &Registry) -> Vec<String> {
    let mut items: Vec<String> = registry.languages().to_vec();
    items.push(NEW_LANGUAGE_ITEM.to_string());
    items
}

/// Menu entries for the template step: "none" first, then each template.
fn template_items(templates: &[String]) -> Vec<String> {
    let mut items = vec![NO_TEMPLATE_ITEM.to_string()];
    items.extend(templates.iter().cloned());
    items
}

/// Ask for everything [`catalog::create_project`] needs.
///
/// Returns `None` when the user declines the final confirmation.
pub fn run(registry: &Registry, ctx: &DevmapContext) -> Result<Option<NewProject>, ApiError> {
    let languages = language_items(registry);
    let choice = Select::new()
        .with_prompt("Language")
        .items(&languages)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let (language, create_language) = if choice + 1 == languages.len() {
        let language: String = Input::new()
            .with_prompt("New language name")
            .interact_text()
            .map_err(prompt_err)?;
        (language.trim().to_string(), true)
    } else {
        (languages[choice].clone(), false)
    };

    let name: String = Input::new()
        .with_prompt("Project name")
        .interact_text()
        .map_err(prompt_err)?;

    let slug = catalog::folder_name_for(&name);
    let use_slug = !slug.is_empty()
        && Confirm::new()
            .with_prompt(format!("Use folder name '{}'?", slug))
            .default(true)
            .interact()
            .map_err(prompt_err)?;
    let folder_name = if use_slug {
        slug
    } else {
        Input::<String>::new()
            .with_prompt("Folder name")
            .default(name.trim().to_string())
            .interact_text()
            .map_err(prompt_err)?
    };

    let templates = catalog::list_templates(ctx, &language);
    let template = if templates.is_empty() {
        None
    } else {
        let items = template_items(&templates);
        let selected = Select::new()
            .with_prompt("Template")
            .items(&items)
            .default(0)
            .interact()
            .map_err(prompt_err)?;
        (selected > 0).then(|| items[selected].clone())
    };

    let init_git = Confirm::new()
        .with_prompt("Initialize a git repository?")
        .default(true)
        .interact()
        .map_err(prompt_err)?;

    let confirmed = Confirm::new()
        .with_prompt(format!("Create {}/{}?", language, folder_name.trim()))
        .default(true)
        .interact()
        .map_err(prompt_err)?;
    if !confirmed {
        return Ok(None);
    }

    Ok(Some(NewProject {
        name,
        language,
        folder_name: Some(folder_name),
        template,
        init_git,
        create_language,
    }))
}
