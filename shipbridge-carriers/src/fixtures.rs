use shipbridge_core::models::{
    AccountInfo, Address, Contact, CustomsDeclaration, DeclaredValue, Dimensions,
    GenericShippingRequest, Package, Party, WeightInfo,
};

pub fn sample_request() -> GenericShippingRequest {
    GenericShippingRequest {
        weight: WeightInfo {
            value: 1000.0,
            unit: "Grams".into(),
        },
        shipper: Party {
            contact: Contact {
                name: "Sender Name".into(),
                mobile_number: "502009622".into(),
                phone_number: "502009622".into(),
                email_address: "sender@email.com".into(),
                company_name: "Test Sender Company".into(),
            },
            address: Address {
                line1: "Address Line 1".into(),
                line2: "Address Line 2".into(),
                city: "Dubai".into(),
                country_code: "AE".into(),
                ..Default::default()
            },
            reference_no1: "4565165".into(),
            reference_no2: "ShipperRef2".into(),
        },
        consignee: Party {
            contact: Contact {
                name: "Receiver Name".into(),
                mobile_number: "8008333".into(),
                phone_number: "8008333".into(),
                email_address: "receiver@email.com".into(),
                company_name: "Test Receiver Company".into(),
            },
            address: Address {
                line1: "Receiver Address Line 1".into(),
                line2: "Receiver Address Line 2".into(),
                city: "AURORA".into(),
                state: "New York".into(),
                country_code: "US".into(),
                zip_code: "10001".into(),
            },
            ..Default::default()
        },
        dimensions: Dimensions {
            length: 10.0,
            height: 10.0,
            width: 10.0,
            unit: "Meter".into(),
        },
        account: AccountInfo {
            number: "123".into(),
            username: "testuser".into(),
            password: "testpass".into(),
        },
        product_code: "XPS".into(),
        service_type: "Express".into(),
        is_insured: true,
        declared_value: DeclaredValue {
            amount: 1686.0,
            currency: "USD".into(),
        },
        number_of_pieces: 2,
        reference_numbers: vec!["REF1".into(), "REF2".into()],
        special_notes: "Test instruction".into(),
        customs_declarations: vec![
            CustomsDeclaration {
                reference: "CD-1".into(),
                description: "Women Shirt".into(),
                country_of_origin: "AE".into(),
                weight: 100.0,
                quantity: 10,
                hs_code: "123456".into(),
                value: 49.0,
                dimensions: Dimensions {
                    length: 1.0,
                    height: 2.0,
                    width: 3.0,
                    unit: "Meter".into(),
                },
            },
            CustomsDeclaration {
                description: "Women Pant".into(),
                country_of_origin: "AE".into(),
                weight: 100.0,
                quantity: 5,
                hs_code: "789012".into(),
                value: 25.0,
                ..Default::default()
            },
        ],
        packages: vec![
            Package {
                width: 10.0,
                height: 10.0,
                length: 10.0,
                weight: 0.2,
                pieces: 1,
                value: 50.0,
            },
            Package {
                width: 10.0,
                height: 15.0,
                length: 15.0,
                weight: 0.45,
                pieces: 1,
                value: 50.0,
            },
        ],
        ..Default::default()
    }
}
