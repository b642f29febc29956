// File: src/pages/mod.rs
// Purpose: Static page content and the navigation chrome

pub mod home;
pub mod projects;
pub mod signup;

use maud::{html, Markup};
use solidaria_router::{PageRecord, Pages};

/// Page keys, matching the `data-page` attributes in the navigation
pub mod keys {
    pub const INDEX: &str = "index";
    pub const PROJETOS: &str = "projetos";
    pub const CADASTRO: &str = "cadastro";
}

/// Builds the fixed three-page registry, home first
pub fn registry() -> Pages {
    let mut pages = Pages::new();
    pages.add(PageRecord::new(
        keys::INDEX,
        "Início - ONG Solidariedade",
        home::content().into_string(),
    ));
    pages.add(PageRecord::new(
        keys::PROJETOS,
        "Projetos Sociais - ONG Solidariedade",
        projects::content().into_string(),
    ));
    pages.add(PageRecord::new(
        keys::CADASTRO,
        "Cadastro - ONG Solidariedade",
        signup::content().into_string(),
    ));
    pages
}

/// Navigation bar with one `data-page` link per registered page
pub fn nav_markup() -> Markup {
    html! {
        nav.nav-principal aria-label="Navegação principal" {
            ul {
                li { a href="#" data-page=(keys::INDEX) { "Início" } }
                li { a href="#" data-page=(keys::PROJETOS) { "Projetos Sociais" } }
                li { a href="#" data-page=(keys::CADASTRO) { "Cadastro" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solidaria_forms::cadastro;

    #[test]
    fn test_registry_has_the_three_pages_in_order() {
        let pages = registry();
        let keys: Vec<&str> = pages.keys().collect();
        assert_eq!(keys, vec!["index", "projetos", "cadastro"]);
    }

    #[test]
    fn test_titles_carry_the_site_name() {
        let pages = registry();
        for key in ["index", "projetos", "cadastro"] {
            let page = pages.get(key).unwrap();
            assert!(
                page.title.ends_with("- ONG Solidariedade"),
                "title {:?}",
                page.title
            );
            assert!(!page.content.is_empty());
        }
    }

    #[test]
    fn test_every_nav_link_targets_a_registered_page() {
        let pages = registry();
        let nav = nav_markup().into_string();

        for key in pages.keys() {
            assert!(
                nav.contains(&format!("data-page=\"{}\"", key)),
                "nav link missing for {key:?}"
            );
        }
    }

    #[test]
    fn test_signup_markup_carries_an_input_and_error_span_per_rule() {
        let content = registry().get(keys::CADASTRO).unwrap().content.clone();

        for field in cadastro::rules().field_names() {
            assert!(
                content.contains(&format!("name=\"{}\"", field)),
                "input missing for {field:?}"
            );
            assert!(
                content.contains(&format!("id=\"erro-{}\"", field)),
                "error span missing for {field:?}"
            );
        }
    }

    #[test]
    fn test_signup_markup_has_the_participation_checkboxes_and_alerts() {
        let content = registry().get(keys::CADASTRO).unwrap().content.clone();

        assert!(content.contains("id=\"formCadastro\""));
        assert!(content.contains("name=\"voluntario\""));
        assert!(content.contains("name=\"doador\""));
        assert!(content.contains("id=\"alertaSucesso\""));
        assert!(content.contains("id=\"alertaErro\""));
    }
}
