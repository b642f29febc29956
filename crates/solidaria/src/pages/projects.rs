// File: src/pages/projects.rs
// Purpose: Social projects page content

use maud::{html, Markup};

/// One project card
struct Project {
    title: &'static str,
    description: &'static str,
    impact: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Educação para Todos",
        description: "Reforço escolar e alfabetização de jovens e adultos em comunidades \
                      com baixo acesso à educação formal.",
        impact: "Mais de 500 alunos atendidos por ano",
    },
    Project {
        title: "Saúde e Bem-estar",
        description: "Mutirões de saúde preventiva, acompanhamento nutricional e apoio \
                      psicológico gratuito.",
        impact: "12 mutirões realizados no último ano",
    },
    Project {
        title: "Inclusão Digital",
        description: "Cursos de informática básica e programação para adolescentes e \
                      pessoas em busca de recolocação profissional.",
        impact: "300 certificados emitidos",
    },
    Project {
        title: "Economia Solidária",
        description: "Capacitação de pequenos empreendedores e feiras comunitárias para \
                      geração de renda local.",
        impact: "80 famílias com renda complementar",
    },
];

/// Main-region fragment for the projects page
pub fn content() -> Markup {
    html! {
        section.projetos {
            h2 { "Projetos Sociais" }
            p {
                "Conheça as iniciativas que mantemos com o apoio de voluntários e
                doadores. Cada projeto nasce de uma necessidade real das comunidades
                que acompanhamos."
            }

            div.cards {
                @for project in PROJECTS {
                    article.card {
                        h3 { (project.title) }
                        p { (project.description) }
                        p.impacto { strong { "Impacto: " } (project.impact) }
                    }
                }
            }
        }

        section.participe {
            h3 { "Como Ajudar" }
            p {
                "Você pode participar como voluntário, dedicando algumas horas por
                semana, ou como doador, contribuindo com qualquer valor. Acesse a
                página de cadastro e escolha a forma de participação."
            }
        }
    }
}
