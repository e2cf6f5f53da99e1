use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use shared::models::{Invoice, NewInvoice};

use crate::error::{EngineError, EngineResult};
use crate::format::{clean_number, display_date, parse_display_date, try_parse_currency};

// CSV Header: Data Emissao,Numero,Cliente,Valor,Telefone,Email,CNPJ,Endereco
// Example Row: 30/12/2024,1001,Acme Ltda,"1234,56",11987654321,,12345678000190,
pub const HEADERS: [&str; 8] = [
    "Data Emissao",
    "Numero",
    "Cliente",
    "Valor",
    "Telefone",
    "Email",
    "CNPJ",
    "Endereco",
];

// Spreadsheet-friendly amount: two decimals, comma separator, no grouping, no symbol.
fn export_value(invoice: &Invoice) -> String {
    format!("{:.2}", invoice.value).replace('.', ",")
}

pub struct InvoiceCsv;

impl InvoiceCsv {
    pub fn write_invoices<W: Write>(writer: W, invoices: &[Invoice]) -> EngineResult<()> {
        let mut wtr = WriterBuilder::new().delimiter(b',').from_writer(writer);
        wtr.write_record(HEADERS)?;
        for invoice in invoices {
            wtr.write_record([
                display_date(invoice.issue_date),
                invoice.number.clone(),
                invoice.customer.clone(),
                export_value(invoice),
                invoice.phone.clone(),
                invoice.email.clone(),
                invoice.cnpj.clone(),
                invoice.address.clone(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Writes to `path`, adding a `.csv` extension when it is missing. Returns the path written.
    pub fn export_invoices_to_path(path: &Path, invoices: &[Invoice]) -> EngineResult<PathBuf> {
        let path = match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => path.to_path_buf(),
            _ => {
                let mut name = path.as_os_str().to_owned();
                name.push(".csv");
                PathBuf::from(name)
            }
        };
        let file = File::create(&path)?;
        Self::write_invoices(BufWriter::new(file), invoices)?;
        tracing::info!(path = %path.display(), count = invoices.len(), "Exported invoices");
        Ok(path)
    }

    /// Reads rows back into canonical invoices. Rows are addressed by header name;
    /// any malformed row aborts the import with its line number.
    pub fn read_invoices<R: Read>(reader: R) -> EngineResult<Vec<NewInvoice>> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = rdr.headers()?.clone();

        let mut invoices = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result.map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error reading CSV record at line {}: {}", line, e))
            })?;

            let date_str = Self::required_field(&record, &headers, "Data Emissao", line)?;
            let number = Self::required_field(&record, &headers, "Numero", line)?;
            let customer = Self::required_field(&record, &headers, "Cliente", line)?;
            let value_str = Self::required_field(&record, &headers, "Valor", line)?;

            let issue_date = parse_display_date(date_str.trim()).ok_or_else(|| EngineError::InvalidDate {
                value: date_str.trim().to_string(),
                line,
            })?;
            let value = try_parse_currency(value_str).map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error parsing 'Valor' at line {}: {}", line, e))
            })?;

            invoices.push(NewInvoice {
                issue_date,
                number: number.trim().to_string(),
                customer: customer.trim().to_string(),
                value,
                phone: clean_number(Self::get_field(&record, &headers, "Telefone").unwrap_or_default()),
                email: Self::get_field(&record, &headers, "Email").unwrap_or_default().trim().to_string(),
                cnpj: clean_number(Self::get_field(&record, &headers, "CNPJ").unwrap_or_default()),
                address: Self::get_field(&record, &headers, "Endereco").unwrap_or_default().trim().to_string(),
            });
        }
        Ok(invoices)
    }

    pub fn import_invoices_from_path(path: &Path) -> EngineResult<Vec<NewInvoice>> {
        let file = File::open(path)?;
        Self::read_invoices(BufReader::new(file))
    }

    // Looks a field up by header name, so column order in the file does not matter.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .and_then(|pos| record.get(pos))
    }

    fn required_field<'a>(
        record: &'a StringRecord,
        headers: &StringRecord,
        name: &str,
        line: usize,
    ) -> EngineResult<&'a str> {
        match Self::get_field(record, headers, name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(EngineError::CsvDataFormatError(format!(
                "Missing '{}' field in CSV record at line {}",
                name, line
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn invoice(id: u64, number: &str, value: rust_decimal::Decimal) -> Invoice {
        NewInvoice {
            issue_date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            number: number.to_string(),
            customer: "Acme, Ltda".to_string(),
            value,
            phone: "11987654321".to_string(),
            email: "a@acme.com".to_string(),
            cnpj: "12345678000190".to_string(),
            address: String::new(),
        }
        .with_id(id)
    }

    #[test]
    fn test_write_invoices_layout() {
        let mut out = Vec::new();
        InvoiceCsv::write_invoices(&mut out, &[invoice(1, "1001", dec!(1234.56))]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Data Emissao,Numero,Cliente,Valor,Telefone,Email,CNPJ,Endereco")
        );
        assert_eq!(
            lines.next(),
            Some("30/12/2024,1001,\"Acme, Ltda\",\"1234,56\",11987654321,a@acme.com,12345678000190,")
        );
    }

    #[test]
    fn test_export_then_import_preserves_canonical_values() {
        let invoices = vec![invoice(1, "1001", dec!(1234.56)), invoice(2, "1002", dec!(2.00))];
        let mut out = Vec::new();
        InvoiceCsv::write_invoices(&mut out, &invoices).unwrap();

        let imported = InvoiceCsv::read_invoices(out.as_slice()).unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].clone().with_id(1), invoices[0]);
        assert_eq!(imported[1].value, dec!(2.00));
    }

    #[test]
    fn test_import_accepts_display_forms() {
        let csv = "Numero,Data Emissao,Cliente,Valor,Telefone,CNPJ\n\
                   7,01/02/2024,Globex,R$ 1.000,(11) 3456-7890,12.345.678/0001-90\n";
        let imported = InvoiceCsv::read_invoices(csv.as_bytes()).unwrap();
        assert_eq!(imported[0].value, dec!(1000.00));
        assert_eq!(imported[0].phone, "1134567890");
        assert_eq!(imported[0].cnpj, "12345678000190");
        assert_eq!(imported[0].email, "");
    }

    #[test]
    fn test_import_missing_field() {
        let csv = "Data Emissao,Numero,Cliente\n01/02/2024,7,Globex\n";
        let err = InvoiceCsv::read_invoices(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing 'Valor' field"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_import_invalid_date_and_value() {
        let bad_date = "Data Emissao,Numero,Cliente,Valor\n01/01/2024,6,Acme,10\n31/02/2024,7,Globex,10\n";
        let err = InvoiceCsv::read_invoices(bad_date.as_bytes()).unwrap_err();
        assert!(matches!(&err, EngineError::InvalidDate { value, line: 3 } if value == "31/02/2024"));
        assert_eq!(err.to_string(), "Invalid date '31/02/2024' at line 3, expected DD/MM/YYYY");

        let bad_value = "Data Emissao,Numero,Cliente,Valor\n01/02/2024,7,Globex,...\n";
        assert!(InvoiceCsv::read_invoices(bad_value.as_bytes())
            .unwrap_err()
            .to_string()
            .contains("Error parsing 'Valor' at line 2"));
    }

    #[test]
    fn test_export_to_path_adds_extension() {
        let dir = tempfile::tempdir().unwrap();
        let written = InvoiceCsv::export_invoices_to_path(&dir.path().join("notas"), &[invoice(1, "1", dec!(1))]).unwrap();
        assert_eq!(written.extension().unwrap(), "csv");
        assert_eq!(InvoiceCsv::import_invoices_from_path(&written).unwrap().len(), 1);
    }

    #[test]
    fn test_import_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Data Emissao,Numero,Cliente,Valor").unwrap();
        writeln!(file, "10/10/2024,55,Initech,\"99,9\"").unwrap();
        let imported = InvoiceCsv::import_invoices_from_path(file.path()).unwrap();
        assert_eq!(imported[0].value, dec!(99.90));
    }
}
