// File: src/pages/signup.rs
// Purpose: Signup page with the registration form markup

use maud::{html, Markup};
use solidaria_forms::cadastro::fields;

/// Presentation data for one rendered input
struct FieldSpec {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: Option<&'static str>,
}

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: fields::NOME,
        label: "Nome Completo",
        input_type: "text",
        placeholder: Some("Digite seu nome completo"),
    },
    FieldSpec {
        name: fields::EMAIL,
        label: "E-mail",
        input_type: "email",
        placeholder: Some("seu.email@exemplo.com"),
    },
    FieldSpec {
        name: fields::CPF,
        label: "CPF",
        input_type: "text",
        placeholder: Some("000.000.000-00"),
    },
    FieldSpec {
        name: fields::TELEFONE,
        label: "Telefone",
        input_type: "tel",
        placeholder: Some("(11) 99999-9999"),
    },
    FieldSpec {
        name: fields::DATA_NASCIMENTO,
        label: "Data de Nascimento",
        input_type: "date",
        placeholder: None,
    },
];

const ADDRESS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: fields::ENDERECO,
        label: "Endereço",
        input_type: "text",
        placeholder: Some("Rua, número e complemento"),
    },
    FieldSpec {
        name: fields::CEP,
        label: "CEP",
        input_type: "text",
        placeholder: Some("00000-000"),
    },
    FieldSpec {
        name: fields::CIDADE,
        label: "Cidade",
        input_type: "text",
        placeholder: Some("Sua cidade"),
    },
];

/// States offered by the endereço select
const ESTADOS: &[(&str, &str)] = &[
    ("SP", "São Paulo"),
    ("RJ", "Rio de Janeiro"),
    ("MG", "Minas Gerais"),
    ("BA", "Bahia"),
    ("RS", "Rio Grande do Sul"),
    ("PR", "Paraná"),
    ("PE", "Pernambuco"),
    ("CE", "Ceará"),
    ("PA", "Pará"),
    ("SC", "Santa Catarina"),
];

/// Label, input and the error span the validation flow writes into
fn field_group(spec: &FieldSpec) -> Markup {
    html! {
        div.form-group {
            label.required for=(spec.name) { (spec.label) }
            input type=(spec.input_type) id=(spec.name) name=(spec.name)
                placeholder=[spec.placeholder] required;
            span.form-error id=(format!("erro-{}", spec.name)) {}
        }
    }
}

/// Main-region fragment for the signup page
pub fn content() -> Markup {
    html! {
        section.cadastro {
            h2 { "Cadastro de Voluntários e Doadores" }
            p {
                "Preencha o formulário abaixo para participar. Os campos marcados
                são obrigatórios e é preciso ter no mínimo 18 anos."
            }

            form id="formCadastro" novalidate {
                fieldset {
                    legend { "Informações Pessoais" }
                    @for spec in PERSONAL_FIELDS {
                        (field_group(spec))
                    }
                }

                fieldset {
                    legend { "Endereço" }
                    @for spec in ADDRESS_FIELDS {
                        (field_group(spec))
                    }

                    div.form-group {
                        label.required for=(fields::ESTADO) { "Estado" }
                        select id=(fields::ESTADO) name=(fields::ESTADO) required {
                            option value="" { "Selecione um estado" }
                            @for &(uf, nome) in ESTADOS {
                                option value=(uf) { (nome) }
                            }
                        }
                        span.form-error id=(format!("erro-{}", fields::ESTADO)) {}
                    }
                }

                fieldset {
                    legend { "Tipo de Participação" }
                    div.form-check {
                        input type="checkbox" id=(fields::VOLUNTARIO)
                            name=(fields::VOLUNTARIO) value=(fields::VOLUNTARIO);
                        label for=(fields::VOLUNTARIO) { "Desejo ser voluntário" }
                    }
                    div.form-check {
                        input type="checkbox" id=(fields::DOADOR)
                            name=(fields::DOADOR) value=(fields::DOADOR);
                        label for=(fields::DOADOR) { "Desejo ser doador" }
                    }
                }

                div id="alertaSucesso" class="alert alert-sucesso" hidden {
                    strong { "Sucesso! " }
                    "Seu cadastro foi realizado. Entraremos em contato em breve."
                }
                div id="alertaErro" class="alert alert-erro" hidden {
                    strong { "Erro! " }
                    "Por favor, corrija os campos destacados e tente novamente."
                }

                div.form-actions {
                    button type="submit" { "Enviar Cadastro" }
                    button type="reset" { "Limpar Formulário" }
                }
            }
        }
    }
}
