// File: src/pages/home.rs
// Purpose: Landing page content

use maud::{html, Markup};

/// Main-region fragment for the landing page
pub fn content() -> Markup {
    html! {
        section.hero {
            h2 { "Bem-vindo à ONG Solidariedade" }
            p {
                "A " strong { "ONG Solidariedade" } " é uma organização sem fins lucrativos
                dedicada a transformar vidas através de projetos sociais inovadores e
                sustentáveis. Desde 2010, trabalhamos para construir uma sociedade mais
                justa e igualitária."
            }
        }

        section.missao {
            h3 { "Nossa Missão" }
            p {
                "Promover o desenvolvimento social através de ações que garantam
                dignidade, educação e oportunidades para comunidades em situação de
                vulnerabilidade."
            }

            h3 { "Nossa Visão" }
            p {
                "Ser referência nacional em projetos sociais, reconhecida pela
                excelência, inovação e impacto positivo na vida das pessoas."
            }

            h3 { "Nossos Valores" }
            ul {
                li { strong { "Solidariedade:" } " compromisso com o bem-estar coletivo" }
                li { strong { "Transparência:" } " ética e honestidade em todas as ações" }
                li { strong { "Inclusão:" } " respeito à diversidade e à igualdade" }
                li { strong { "Sustentabilidade:" } " impacto social duradouro" }
            }
        }

        section.contato {
            h3 { "Informações de Contato" }
            p { strong { "Endereço:" } " Rua da Solidariedade, 123 - São Paulo, SP" }
            p { strong { "Telefone:" } " (11) 3456-7890" }
            p { strong { "E-mail:" } " contato@ongsolidariedade.org.br" }
            p { strong { "Horário:" } " segunda a sexta, das 9h às 17h" }
        }
    }
}
