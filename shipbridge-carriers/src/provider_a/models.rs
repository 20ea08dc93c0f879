use serde::Serialize;

/// Carrier A body. Mirrors the generic shape with a few carrier-specific fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub weight: Weight,
    pub shipper: Party,
    pub consignee: Party,
    pub dimensions: Dimensions,
    pub account: Account,
    pub product_code: String,
    pub service_type: String,
    pub print_type: String,
    pub is_insured: bool,
    pub customs_declarations: Vec<CustomsDeclaration>,
    pub declared_value: DeclaredValue,
    pub number_of_pieces: i32,
    pub reference_number1: String,
    pub reference_number2: String,
    pub reference_number3: String,
    pub reference_number4: String,
    pub special_notes: String,
    pub remarks: String,
    pub delivery_type: String,
    pub content_type: String,
    pub is_cod: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Weight {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub contact: Contact,
    pub address: Address,
    pub reference_no1: String,
    pub reference_no2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub mobile_number: String,
    pub phone_number: String,
    pub email_address: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub country_code: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dimensions {
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Account {
    pub number: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomsDeclaration {
    pub reference: String,
    pub description: String,
    pub country_of_origin: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub quantity: i32,
    pub hs_code: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeclaredValue {
    pub amount: f64,
    pub currency: String,
}
