//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn kesspay_cmd() -> Command {
    Command::cargo_bin("kesspay").unwrap()
}

mod validate {
    use super::*;

    #[test]
    fn test_validate_create_order_fixture() {
        kesspay_cmd()
            .arg("validate")
            .arg("../../fixtures/requests/create_order.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid create-order request"));
    }

    #[test]
    fn test_validate_query_order_fixture() {
        kesspay_cmd()
            .arg("validate")
            .arg("--query")
            .arg("../../fixtures/requests/query_order.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid query-order request"));
    }

    #[test]
    fn test_validate_nonexistent_file() {
        kesspay_cmd()
            .arg("validate")
            .arg("nonexistent.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read file"));
    }

    #[test]
    fn test_validate_invalid_json() {
        let temp_file = std::env::temp_dir().join("kesspay_test_invalid.json");
        fs::write(&temp_file, "{ invalid json }").unwrap();

        kesspay_cmd()
            .arg("validate")
            .arg(&temp_file)
            .assert()
            .failure();

        fs::remove_file(&temp_file).ok();
    }

    #[test]
    fn test_validate_rejects_empty_order_id() {
        let temp_file = std::env::temp_dir().join("kesspay_test_empty_otn.json");
        fs::write(
            &temp_file,
            r#"{
                "service": "webpay.acquire.createorder",
                "sign_type": "MD5",
                "seller_code": "958689692346",
                "out_trade_no": "",
                "total_amount": 16.5,
                "currency": "USD"
            }"#,
        )
        .unwrap();

        kesspay_cmd()
            .arg("validate")
            .arg(&temp_file)
            .assert()
            .failure()
            .stderr(predicate::str::contains("validation failed"));

        fs::remove_file(&temp_file).ok();
    }
}

mod canonicalize {
    use super::*;

    #[test]
    fn test_canonicalize_create_order_fixture() {
        kesspay_cmd()
            .arg("canonicalize")
            .arg("../../fixtures/requests/create_order.json")
            .arg("--key")
            .arg("testkey")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "currency=USD&out_trade_no=TR5673455626&seller_code=958689692346\
                 &service=webpay.acquire.createorder&sign_type=MD5&total_amount=16.5&key=testkey",
            ));
    }

    #[test]
    fn test_canonicalize_query_order_fixture() {
        kesspay_cmd()
            .arg("canonicalize")
            .arg("--query")
            .arg("../../fixtures/requests/query_order.json")
            .arg("--key")
            .arg("testkey")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "out_trade_no=TR5673455626&service=webpay.acquire.queryorder&sign_type=MD5&key=testkey",
            ));
    }

    #[test]
    fn test_canonicalize_rejects_empty_key() {
        kesspay_cmd()
            .arg("canonicalize")
            .arg("../../fixtures/requests/create_order.json")
            .arg("--key")
            .arg("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Secret key is empty"));
    }
}

mod sign {
    use super::*;

    #[test]
    fn test_sign_create_order_fixture() {
        kesspay_cmd()
            .arg("sign")
            .arg("../../fixtures/requests/create_order.json")
            .arg("--key")
            .arg("testkey")
            .assert()
            .success()
            .stdout(predicate::str::contains("aa0921bb55fea27e546fd1ecf1d6a16f"));
    }

    #[test]
    fn test_sign_output_is_valid_signed_json() {
        let output = kesspay_cmd()
            .arg("sign")
            .arg("../../fixtures/requests/query_order.json")
            .arg("--query")
            .arg("--key")
            .arg("testkey")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let signed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(signed["sign"], "9d43aca767b8f7c29fd6bdbb9a5dbde9");
        assert_eq!(signed["service"], "webpay.acquire.queryorder");
    }
}

mod gateway {
    use super::*;

    #[test]
    fn test_create_order_requires_config() {
        kesspay_cmd()
            .arg("create-order")
            .arg("../../fixtures/requests/create_order.json")
            .env_remove("KESSPAY_USERNAME")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load gateway config"));
    }
}
