use shipbridge_core::models::CustomsDeclaration;
use shipbridge_core::GenericShippingRequest;

use super::models::{ExportItemDeclaration, PackageRequest, Request};

const GRAMS_PER_KG: f64 = 1000.0;

pub fn map_to_provider_b(req: &GenericShippingRequest) -> Request {
    let shipper = &req.shipper;
    let consignee = &req.consignee;

    let mut result = Request {
        product_type: req.product_code.clone(),
        service_type: map_service_type(req.is_cod).to_string(),
        cod_amount: format!("{:.2}", req.cod_amount),
        cod_currency: req.declared_value.currency.clone(),
        special_instruction: req.special_notes.clone(),
        shipper: shipper.contact.company_name.clone(),
        shipper_c_person: shipper.contact.name.clone(),
        shipper_address1: shipper.address.line1.clone(),
        shipper_address2: shipper.address.line2.clone(),
        shipper_city: shipper.address.city.clone(),
        shipper_email: shipper.contact.email_address.clone(),
        shipper_phone: shipper.contact.phone_number.clone(),
        shipper_mobile: shipper.contact.mobile_number.clone(),
        shipper_ref_no: shipper.reference_no1.clone(),
        consignee: consignee.contact.company_name.clone(),
        consignee_c_person: consignee.contact.name.clone(),
        consignee_address1: consignee.address.line1.clone(),
        consignee_address2: consignee.address.line2.clone(),
        consignee_city: consignee.address.city.clone(),
        consignee_phone: consignee.contact.phone_number.clone(),
        consignee_mob: consignee.contact.mobile_number.clone(),
        consignee_email: consignee.contact.email_address.clone(),
        consignee_state: consignee.address.state.clone(),
        consignee_zip_code: consignee.address.zip_code.clone(),
        value_of_shipment: req.declared_value.amount,
        value_currency: req.declared_value.currency.clone(),
        goods_description: build_goods_description(&req.customs_declarations),
        number_of_pieces: req.number_of_pieces,
        weight: req.weight.value / GRAMS_PER_KG,
        user_name: req.account.username.clone(),
        password: req.account.password.expose().clone(),
        account_no: req.account.number.clone(),
        ..Default::default()
    };

    // Station codes are only derived for parties with a street address
    if !shipper.address.line1.is_empty() {
        result.origin = extract_city_code(&shipper.address.city);
    }
    if !consignee.address.line1.is_empty() {
        result.destination = extract_city_code(&consignee.address.city);
    }

    result.package_request = req
        .packages
        .iter()
        .map(|pkg| PackageRequest {
            dim_width: pkg.width,
            dim_height: pkg.height,
            dim_length: pkg.length,
            dim_weight: pkg.weight,
            noof_pieces: pkg.pieces,
            shipment_value: pkg.value,
        })
        .collect();

    result.export_item_declaration_request = req
        .customs_declarations
        .iter()
        .map(|cd| ExportItemDeclaration {
            hsn_code: cd.hs_code.clone(),
            item_desc: cd.description.clone(),
            dim_weight: cd.weight / GRAMS_PER_KG,
            noof_pieces: cd.quantity,
            shipment_value: cd.value,
            countryof_origin: cd.country_of_origin.clone(),
        })
        .collect();

    result
}

fn map_service_type(is_cod: bool) -> &'static str {
    if is_cod {
        "COD"
    } else {
        "NOR"
    }
}

fn build_goods_description(declarations: &[CustomsDeclaration]) -> String {
    declarations
        .iter()
        .map(|d| d.description.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// First three characters of the city, uppercased.
fn extract_city_code(city: &str) -> String {
    city.chars().take(3).collect::<String>().to_uppercase()
}
