use std::io::Write;

use serde::Serialize;

use super::ExportError;
use crate::generators::{
    GeneratedCampaign, GeneratedCustomer, GeneratedOrder, GeneratedProduct, GeneratedReturn,
};

/// A record type that is exported as one CSV file.
///
/// `HEADERS` must list the serialized field names in declaration order.
pub trait Table: Serialize {
    const FILE_NAME: &'static str;
    const HEADERS: &'static [&'static str];
}

impl Table for GeneratedProduct {
    const FILE_NAME: &'static str = "products.csv";
    const HEADERS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "selling_price",
        "product_cost",
        "launch_date",
    ];
}

impl Table for GeneratedCustomer {
    const FILE_NAME: &'static str = "customers.csv";
    const HEADERS: &'static [&'static str] = &[
        "customer_id",
        "name",
        "signup_date",
        "region",
        "acquisition_channel",
    ];
}

impl Table for GeneratedCampaign {
    const FILE_NAME: &'static str = "campaigns.csv";
    const HEADERS: &'static [&'static str] = &[
        "campaign_id",
        "campaign_name",
        "start_date",
        "end_date",
        "channel",
        "budget",
    ];
}

impl Table for GeneratedOrder {
    const FILE_NAME: &'static str = "orders.csv";
    const HEADERS: &'static [&'static str] = &[
        "order_id",
        "order_date",
        "customer_id",
        "product_id",
        "quantity",
        "unit_price",
        "campaign_id",
    ];
}

impl Table for GeneratedReturn {
    const FILE_NAME: &'static str = "returns.csv";
    const HEADERS: &'static [&'static str] = &[
        "return_id",
        "order_id",
        "product_id",
        "return_date",
        "quantity_returned",
        "reason",
    ];
}

/// Writes the header row followed by one row per record.
///
/// The header is written even when `rows` is empty.
pub fn write_table<T: Table, W: Write>(out: W, rows: &[T]) -> Result<usize, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{
        CampaignGenerator, CustomerGenerator, OrderGenerator, ProductGenerator, ReturnGenerator,
    };
    use rand::SeedableRng;
    use storefront::{CampaignId, CustomerId, OrderId, ProductId};
    use time::macros::date;

    fn to_string<T: Table>(rows: &[T]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Header produced by serde for the first record, for comparison with `HEADERS`.
    fn serde_header<T: Table>(row: &T) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(row).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        output.lines().next().unwrap().to_string()
    }

    #[test]
    fn test_headers_match_serialized_fields() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let products = ProductGenerator::new().generate_batch(5, &mut rng).unwrap();
        let customers = CustomerGenerator::new().generate_batch(5, &mut rng).unwrap();
        let campaigns = CampaignGenerator::new().generate_batch(2, &mut rng).unwrap();
        let orders = OrderGenerator::new()
            .generate_batch(100, &products, &customers, &campaigns, &mut rng)
            .unwrap();
        let returns = ReturnGenerator::new().generate_batch(&orders, &mut rng).unwrap();

        assert_eq!(serde_header(&products[0]), GeneratedProduct::HEADERS.join(","));
        assert_eq!(serde_header(&customers[0]), GeneratedCustomer::HEADERS.join(","));
        assert_eq!(serde_header(&campaigns[0]), GeneratedCampaign::HEADERS.join(","));
        assert_eq!(serde_header(&orders[0]), GeneratedOrder::HEADERS.join(","));
        assert_eq!(serde_header(&returns[0]), GeneratedReturn::HEADERS.join(","));
    }

    #[test]
    fn test_empty_table_has_header() {
        let output = to_string::<GeneratedReturn>(&[]);
        assert_eq!(
            output,
            "return_id,order_id,product_id,return_date,quantity_returned,reason\n"
        );
    }

    #[test]
    fn test_order_row_format() {
        let orders = vec![
            GeneratedOrder {
                id: OrderId::new(1),
                order_date: date!(2025 - 03 - 09),
                customer_id: CustomerId::new(12),
                product_id: ProductId::new(3),
                quantity: 2,
                unit_price: 149.5,
                campaign_id: Some(CampaignId::new(4)),
            },
            GeneratedOrder {
                id: OrderId::new(2),
                order_date: date!(2025 - 11 - 30),
                customer_id: CustomerId::new(1200),
                product_id: ProductId::new(30),
                quantity: 5,
                unit_price: 1999.99,
                campaign_id: None,
            },
        ];

        let output = to_string(&orders);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "O00001,2025-03-09,C0012,P003,2,149.5,M04");
        assert_eq!(lines[2], "O00002,2025-11-30,C1200,P030,5,1999.99,");
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let mut rng = rand::thread_rng();
        let mut customers = CustomerGenerator::new().generate_batch(1, &mut rng).unwrap();
        customers[0].name = "Mokoena, Thandi".to_string();

        let output = to_string(&customers);
        assert!(output.contains("\"Mokoena, Thandi\""));
    }
}
