use serde::Serialize;

/// Carrier B body: a flat PascalCase document. Some keys are misspelled on the carrier side
/// (`ShipperCPErson`, `NumberofPeices`, `NoofPeices`) and must be sent exactly that way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Request {
    pub origin: String,
    pub destination: String,
    pub product_type: String,
    pub service_type: String,
    #[serde(rename = "CODAmount")]
    pub cod_amount: String,
    #[serde(rename = "CODCurrency")]
    pub cod_currency: String,
    pub special_instruction: String,
    pub shipper: String,
    #[serde(rename = "ShipperCPErson")]
    pub shipper_c_person: String,
    pub shipper_address1: String,
    pub shipper_address2: String,
    pub shipper_city: String,
    pub shipper_email: String,
    pub shipper_phone: String,
    pub shipper_mobile: String,
    pub shipper_ref_no: String,
    pub consignee: String,
    pub consignee_c_person: String,
    pub consignee_address1: String,
    pub consignee_address2: String,
    pub consignee_city: String,
    pub consignee_phone: String,
    pub consignee_mob: String,
    pub consignee_email: String,
    pub consignee_state: String,
    pub consignee_zip_code: String,
    #[serde(rename = "ConsigneeID")]
    pub consignee_id: String,
    #[serde(rename = "ConsigneeIDType")]
    pub consignee_id_type: String,
    pub value_of_shipment: f64,
    pub value_currency: String,
    pub goods_description: String,
    #[serde(rename = "NumberofPeices")]
    pub number_of_pieces: i32,
    pub weight: f64,
    pub package_request: Vec<PackageRequest>,
    pub export_item_declaration_request: Vec<ExportItemDeclaration>,
    pub user_name: String,
    pub password: String,
    pub account_no: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRequest {
    pub dim_width: f64,
    pub dim_height: f64,
    pub dim_length: f64,
    pub dim_weight: f64,
    #[serde(rename = "NoofPeices")]
    pub noof_pieces: i32,
    pub shipment_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportItemDeclaration {
    #[serde(rename = "HSNCODE")]
    pub hsn_code: String,
    pub item_desc: String,
    pub dim_weight: f64,
    #[serde(rename = "NoofPeices")]
    pub noof_pieces: i32,
    pub shipment_value: f64,
    pub countryof_origin: String,
}
