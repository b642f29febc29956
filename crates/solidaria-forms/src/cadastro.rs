// File: src/cadastro.rs
// Purpose: The signup form's rule table, with the site's Portuguese messages

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::{FieldRule, RuleContext, RuleSet};
use crate::submission::{FormReport, Submission};
use solidaria_validation::{is_adult_on, is_valid_cpf, parse_birth_date, strip_cpf};

/// Field identifiers shared by the rule table and the rendered markup
pub mod fields {
    pub const NOME: &str = "nome";
    pub const EMAIL: &str = "email";
    pub const CPF: &str = "cpf";
    pub const TELEFONE: &str = "telefone";
    pub const DATA_NASCIMENTO: &str = "dataNascimento";
    pub const ENDERECO: &str = "endereco";
    pub const CEP: &str = "cep";
    pub const CIDADE: &str = "cidade";
    pub const ESTADO: &str = "estado";
    pub const VOLUNTARIO: &str = "voluntario";
    pub const DOADOR: &str = "doador";
}

/// Message shown when neither participation checkbox is set
pub const PARTICIPATION_MESSAGE: &str =
    "Por favor, selecione pelo menos um tipo de participação (Voluntário ou Doador)";

// Letters (including the Latin-1 accented range) and whitespace
static NOME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s]+$").unwrap());

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static CPF_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap());

static TELEFONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{2}\)\s\d{4,5}-\d{4}$").unwrap());

static CEP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}-\d{3}$").unwrap());

/// CPF passes the check-digit computation once the mask is stripped
fn cpf_check_digits(value: &str, _ctx: &RuleContext) -> bool {
    is_valid_cpf(&strip_cpf(value))
}

/// Birth date parses and the registrant is an adult on the injected day
fn adult(value: &str, ctx: &RuleContext) -> bool {
    parse_birth_date(value).is_some_and(|birth| is_adult_on(birth, ctx.today))
}

/// Builds the signup rule table
///
/// One entry per form field, evaluated in declaration order. The messages
/// are the exact copy the site shows under each input.
pub fn rules() -> RuleSet {
    RuleSet::new()
        .rule(
            FieldRule::new(fields::NOME)
                .required("Nome é obrigatório")
                .min_length(3, "Nome deve ter no mínimo 3 caracteres")
                .max_length(100, "Nome deve ter no máximo 100 caracteres")
                .pattern(&NOME_PATTERN, "Nome deve conter apenas letras"),
        )
        .rule(
            FieldRule::new(fields::EMAIL)
                .required("E-mail é obrigatório")
                .pattern(&EMAIL_PATTERN, "E-mail inválido"),
        )
        .rule(
            FieldRule::new(fields::CPF)
                .required("CPF é obrigatório")
                .pattern(&CPF_PATTERN, "CPF deve estar no formato 000.000.000-00")
                .custom(cpf_check_digits, "CPF inválido"),
        )
        .rule(
            FieldRule::new(fields::TELEFONE)
                .required("Telefone é obrigatório")
                .pattern(
                    &TELEFONE_PATTERN,
                    "Telefone deve estar no formato (11) 99999-9999",
                ),
        )
        .rule(
            FieldRule::new(fields::DATA_NASCIMENTO)
                .required("Data de nascimento é obrigatória")
                .custom(adult, "Você deve ter no mínimo 18 anos"),
        )
        .rule(
            FieldRule::new(fields::ENDERECO)
                .required("Endereço é obrigatório")
                .min_length(5, "Endereço deve ter no mínimo 5 caracteres"),
        )
        .rule(
            FieldRule::new(fields::CEP)
                .required("CEP é obrigatório")
                .pattern(&CEP_PATTERN, "CEP deve estar no formato 00000-000"),
        )
        .rule(
            FieldRule::new(fields::CIDADE)
                .required("Cidade é obrigatória")
                .min_length(2, "Cidade deve ter no mínimo 2 caracteres"),
        )
        .rule(FieldRule::new(fields::ESTADO).required("Estado é obrigatório"))
}

/// At least one participation checkbox (volunteer or donor) must be set
pub fn has_participation(submission: &Submission) -> bool {
    submission.is_checked(fields::VOLUNTARIO) || submission.is_checked(fields::DOADOR)
}

/// Validates a full signup submission
///
/// Runs every applicable field rule, then the participation cross-field
/// constraint. Field errors never mask the participation error or the other
/// way around; the report carries both.
pub fn validate(rules: &RuleSet, submission: &Submission, ctx: &RuleContext) -> FormReport {
    let mut report = rules.validate_submission(submission, ctx);
    if !has_participation(submission) {
        report.participation_error = Some(PARTICIPATION_MESSAGE.to_string());
    }
    report
}
