// Portuguese names for the normalizer API, for call sites written against them.
// Pure renames of the single implementation; the form validators here answer in Portuguese.
pub use crate::format::{
    clean_number as limpar_numero, format_cnpj as formatar_cnpj, format_currency as formatar_moeda,
    format_phone as formatar_telefone, format_sql_date as formatar_data_sql,
    parse_currency as converter_para_decimal, validate_cnpj as validar_cnpj,
    validate_currency as validar_moeda, validate_date as validar_data,
    validate_email as validar_email, validate_phone as validar_telefone,
};
pub use crate::validation::validate_invoice_number as validar_numero_nota;

use crate::validation::{
    validate_customer_form, validate_invoice_form, validate_required_field, Language,
    ValidationOutcome,
};

pub fn validar_campo_obrigatorio(valor: &str, campo: &str) -> (bool, String) {
    ValidationOutcome::from_result(&validate_required_field(valor, campo), Language::PtBr).into()
}

pub fn validar_formulario_nota(data: &str, numero: &str, cliente: &str, valor: &str) -> (bool, String) {
    ValidationOutcome::from_result(&validate_invoice_form(data, numero, cliente, valor), Language::PtBr)
        .into()
}

pub fn validar_formulario_cliente(nome: &str, telefone: &str, email: &str, cnpj: &str) -> (bool, String) {
    ValidationOutcome::from_result(&validate_customer_form(nome, telefone, email, cnpj), Language::PtBr)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_aliases_share_the_implementation() {
        assert_eq!(formatar_moeda("1234,5", true), "R$ 1.234,50");
        assert_eq!(converter_para_decimal("1.234,56"), dec!(1234.56));
        assert_eq!(formatar_telefone("11987654321"), "(11) 98765-4321");
        assert_eq!(formatar_data_sql("01/01/2024").as_deref(), Some("2024-01-01"));
        assert!(validar_numero_nota("42"));
        assert!(!validar_moeda("1.23,4"));
    }

    #[test]
    fn test_portuguese_form_messages() {
        assert_eq!(
            validar_formulario_nota("", "123", "Acme", "100,00"),
            (false, "Preencha todos os campos obrigatórios!".to_string())
        );
        assert_eq!(
            validar_formulario_nota("01/01/2024", "1", "Acme", "0,00"),
            (false, "Valor deve ser maior que zero!".to_string())
        );
        assert_eq!(validar_formulario_cliente("Acme", "", "", ""), (true, String::new()));
        assert_eq!(
            validar_campo_obrigatorio("", "Endereço"),
            (false, "O campo Endereço é obrigatório!".to_string())
        );
    }
}
