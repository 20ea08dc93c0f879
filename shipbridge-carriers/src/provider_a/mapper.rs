use shipbridge_core::models as generic;
use shipbridge_core::GenericShippingRequest;

use super::models::{
    Account, Address, Contact, CustomsDeclaration, DeclaredValue, Dimensions, Party, Request,
    Weight,
};

const PRINT_TYPE: &str = "AWBOnly";

pub fn map_to_provider_a(req: &GenericShippingRequest) -> Request {
    let reference = |i: usize| req.reference_numbers.get(i).cloned().unwrap_or_default();

    Request {
        weight: Weight {
            value: req.weight.value,
            unit: req.weight.unit.clone(),
        },
        shipper: map_party(&req.shipper),
        consignee: map_party(&req.consignee),
        dimensions: map_dimensions(&req.dimensions),
        // Carrier A wants a numeric account; anything unparseable goes out as 0
        account: Account {
            number: req.account.number.trim().parse().unwrap_or(0),
        },
        product_code: req.product_code.clone(),
        service_type: req.service_type.clone(),
        print_type: PRINT_TYPE.to_string(),
        is_insured: req.is_insured,
        customs_declarations: req
            .customs_declarations
            .iter()
            .map(map_customs_declaration)
            .collect(),
        declared_value: DeclaredValue {
            amount: req.declared_value.amount,
            currency: req.declared_value.currency.clone(),
        },
        number_of_pieces: req.number_of_pieces,
        reference_number1: reference(0),
        reference_number2: reference(1),
        reference_number3: reference(2),
        reference_number4: reference(3),
        special_notes: req.special_notes.clone(),
        remarks: req.remarks.clone(),
        delivery_type: req.delivery_type.clone(),
        content_type: req.content_type.clone(),
        is_cod: req.is_cod,
    }
}

fn map_party(party: &generic::Party) -> Party {
    Party {
        contact: Contact {
            name: party.contact.name.clone(),
            mobile_number: party.contact.mobile_number.clone(),
            phone_number: party.contact.phone_number.clone(),
            email_address: party.contact.email_address.clone(),
            company_name: party.contact.company_name.clone(),
        },
        address: Address {
            line1: party.address.line1.clone(),
            city: party.address.city.clone(),
            country_code: party.address.country_code.clone(),
            zip_code: party.address.zip_code.clone(),
        },
        reference_no1: party.reference_no1.clone(),
        reference_no2: party.reference_no2.clone(),
    }
}

fn map_dimensions(dimensions: &generic::Dimensions) -> Dimensions {
    Dimensions {
        length: dimensions.length,
        height: dimensions.height,
        width: dimensions.width,
        unit: dimensions.unit.clone(),
    }
}

fn map_customs_declaration(cd: &generic::CustomsDeclaration) -> CustomsDeclaration {
    CustomsDeclaration {
        reference: cd.reference.clone(),
        description: cd.description.clone(),
        country_of_origin: cd.country_of_origin.clone(),
        weight: cd.weight,
        // Item dimensions are sent without a unit
        dimensions: Dimensions {
            length: cd.dimensions.length,
            height: cd.dimensions.height,
            width: cd.dimensions.width,
            unit: String::new(),
        },
        quantity: cd.quantity,
        hs_code: cd.hs_code.clone(),
        value: cd.value,
    }
}
