//! Substitution context builder
//!
//! Every key the template vocabulary can reference is set on every
//! render, so a well-formed template can only fail on tags outside the
//! vocabulary. The keys match the uploaded templates in the field:
//!
//! - quote: `numero_preventivo`, `data_preventivo`, `validita_giorni`
//! - client: `ragione_sociale`, `indirizzo`, `cap`, `citta`,
//!   `provincia`, `paese`, `partita_iva`, `codice_fiscale`, `email`,
//!   `telefono`, `referente`
//! - items loop `articoli`: `n` (1-based position), `descrizione`,
//!   `quantita`, `prezzo_unitario`, `totale_riga`
//! - totals: `totale`; free text: `note`

use crate::error::ExportResult;
use crate::format::{format_currency, format_date};
use docx_template::{TagContext, TagValue};
use quote_model::{Client, Quote};

/// Build the full substitution context for one render.
///
/// A dangling client reference renders every client field, `paese`
/// included, as the empty string: a document for an unknown client
/// should not claim a country. The "Italia" default is a record-level
/// default and applies only when a client record exists.
pub fn build_render_context(quote: &Quote, client: Option<&Client>) -> ExportResult<TagContext> {
    let mut ctx = TagContext::new();

    ctx.set("numero_preventivo", TagValue::number(quote.quote_number as f64));
    ctx.set("data_preventivo", format_date(quote.quote_date));
    ctx.set(
        "validita_giorni",
        TagValue::number(quote.effective_validity_days() as f64),
    );

    let opt = |value: Option<&String>| value.cloned().unwrap_or_default();
    ctx.set(
        "ragione_sociale",
        client.map(|c| c.company_name.clone()).unwrap_or_default(),
    );
    ctx.set("indirizzo", opt(client.and_then(|c| c.address.as_ref())));
    ctx.set("cap", opt(client.and_then(|c| c.postal_code.as_ref())));
    ctx.set("citta", opt(client.and_then(|c| c.city.as_ref())));
    ctx.set("provincia", opt(client.and_then(|c| c.province.as_ref())));
    ctx.set("paese", client.map(|c| c.country.clone()).unwrap_or_default());
    ctx.set("partita_iva", opt(client.and_then(|c| c.vat_number.as_ref())));
    ctx.set("codice_fiscale", opt(client.and_then(|c| c.fiscal_code.as_ref())));
    ctx.set("email", opt(client.and_then(|c| c.email.as_ref())));
    ctx.set("telefono", opt(client.and_then(|c| c.phone.as_ref())));
    ctx.set("referente", opt(client.and_then(|c| c.contact_person.as_ref())));

    let mut rows = Vec::with_capacity(quote.items.len());
    for (index, item) in quote.sorted_items().into_iter().enumerate() {
        let mut row = TagContext::new();
        row.set("n", TagValue::number((index + 1) as f64));
        row.set("descrizione", item.description.clone());
        row.set("quantita", TagValue::number(item.quantity));
        row.set("prezzo_unitario", format_currency(item.unit_price)?);
        row.set("totale_riga", format_currency(item.line_total())?);
        rows.push(row);
    }
    ctx.set("articoli", TagValue::list(rows));

    ctx.set("totale", format_currency(quote.total_amount)?);
    ctx.set("note", quote.notes.clone().unwrap_or_default());

    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quote_model::QuoteItem;
    use uuid::Uuid;

    fn sample_quote() -> Quote {
        let mut quote = Quote::new(Uuid::new_v4(), NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
            .with_quote_number(42)
            .with_notes("Consegna in 2 settimane");
        quote
            .add_item(QuoteItem::new("Widget").with_quantity(2.0).with_unit_price(10.0))
            .unwrap();
        quote
    }

    fn sample_client() -> Client {
        Client::new("Acme Srl")
            .with_address("Via Roma 1")
            .with_city("Milano")
            .with_postal_code("20100")
            .with_province("MI")
            .with_vat_number("IT01234567890")
    }

    #[test]
    fn test_quote_fields() {
        let quote = sample_quote();
        let ctx = build_render_context(&quote, Some(&sample_client())).unwrap();
        assert_eq!(ctx.get("numero_preventivo"), Some(&TagValue::number(42.0)));
        assert_eq!(ctx.get("data_preventivo"), Some(&TagValue::text("05/03/2026")));
        assert_eq!(ctx.get("validita_giorni"), Some(&TagValue::number(30.0)));
        assert_eq!(ctx.get("note"), Some(&TagValue::text("Consegna in 2 settimane")));
    }

    #[test]
    fn test_client_fields() {
        let ctx = build_render_context(&sample_quote(), Some(&sample_client())).unwrap();
        assert_eq!(ctx.get("ragione_sociale"), Some(&TagValue::text("Acme Srl")));
        assert_eq!(ctx.get("citta"), Some(&TagValue::text("Milano")));
        assert_eq!(ctx.get("paese"), Some(&TagValue::text("Italia")));
        assert_eq!(ctx.get("partita_iva"), Some(&TagValue::text("IT01234567890")));
        // Unset client fields become empty strings
        assert_eq!(ctx.get("referente"), Some(&TagValue::text("")));
        assert_eq!(ctx.get("telefono"), Some(&TagValue::text("")));
    }

    #[test]
    fn test_missing_client_renders_empty_strings() {
        let ctx = build_render_context(&sample_quote(), None).unwrap();
        for key in [
            "ragione_sociale",
            "indirizzo",
            "cap",
            "citta",
            "provincia",
            "paese",
            "partita_iva",
            "codice_fiscale",
            "email",
            "telefono",
            "referente",
        ] {
            assert_eq!(ctx.get(key), Some(&TagValue::text("")), "key {key}");
        }
    }

    #[test]
    fn test_items_loop_rows() {
        let quote = sample_quote();
        let ctx = build_render_context(&quote, None).unwrap();
        let Some(TagValue::List(rows)) = ctx.get("articoli") else {
            panic!("articoli must be a list");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("n"), Some(&TagValue::number(1.0)));
        assert_eq!(rows[0].get("descrizione"), Some(&TagValue::text("Widget")));
        assert_eq!(rows[0].get("quantita"), Some(&TagValue::number(2.0)));
        assert_eq!(rows[0].get("prezzo_unitario"), Some(&TagValue::text("10,00 €")));
        assert_eq!(rows[0].get("totale_riga"), Some(&TagValue::text("20,00 €")));
        assert_eq!(ctx.get("totale"), Some(&TagValue::text("20,00 €")));
    }

    #[test]
    fn test_rows_follow_sort_order() {
        let mut quote = sample_quote();
        quote
            .add_item_with_order(
                QuoteItem::new("Primo").with_sort_order(0).with_unit_price(1.0),
            )
            .unwrap();
        // "Widget" got sort_order 0 on append too; stable sort keeps it first
        let ctx = build_render_context(&quote, None).unwrap();
        let Some(TagValue::List(rows)) = ctx.get("articoli") else {
            panic!("articoli must be a list");
        };
        assert_eq!(rows[0].get("descrizione"), Some(&TagValue::text("Widget")));
        assert_eq!(rows[1].get("descrizione"), Some(&TagValue::text("Primo")));
        assert_eq!(rows[1].get("n"), Some(&TagValue::number(2.0)));
    }

    #[test]
    fn test_zero_items() {
        let quote = Quote::new(Uuid::new_v4(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let ctx = build_render_context(&quote, None).unwrap();
        assert_eq!(ctx.get("articoli"), Some(&TagValue::list(vec![])));
        assert_eq!(ctx.get("totale"), Some(&TagValue::text("0,00 €")));
        assert_eq!(ctx.get("note"), Some(&TagValue::text("")));
    }
}
