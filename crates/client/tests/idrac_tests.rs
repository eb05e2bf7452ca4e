//! Integration tests for the iDRAC dialect against a mock Redfish service.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use redfish_client::vendors::idrac::IdracClient;
use redfish_client::{
    BmcClient, ClientError, ReportBody, ReportKind, ResetType, assemble_report,
};

const SYSTEM_PATH: &str = "/redfish/v1/Systems/System.Embedded.1";

fn client_for(server: &MockServer) -> IdracClient {
    IdracClient::with_transport(common::transport_for(server), "idrac-1".to_string())
}

#[tokio::test]
async fn system_info_decodes_dell_payload() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        SYSTEM_PATH,
        common::system_body("System.Embedded.1", "On"),
    )
    .await;

    let client = client_for(&server);
    let info = client.system_info().await.unwrap();
    assert_eq!(info.model.as_deref(), Some("PowerEdge R640"));
    assert_eq!(info.bios_version.as_deref(), Some("2.19.1"));
    assert!(info.power_state.is_on());
}

#[tokio::test]
async fn storage_health_report_walks_controllers_and_drives() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        SYSTEM_PATH,
        common::system_body("System.Embedded.1", "On"),
    )
    .await;
    common::mount_get(
        &server,
        &format!("{SYSTEM_PATH}/Storage"),
        common::storage_collection_body(SYSTEM_PATH),
    )
    .await;
    common::mount_get(
        &server,
        &format!("{SYSTEM_PATH}/Storage/RAID.Integrated.1-1"),
        common::controller_body(SYSTEM_PATH),
    )
    .await;
    common::mount_get(
        &server,
        &format!("{SYSTEM_PATH}/Storage/RAID.Integrated.1-1/Drives/Disk.0"),
        common::drive_body(),
    )
    .await;

    let client = client_for(&server);
    let report = assemble_report(&client, ReportKind::StorageHealth { include_drives: true })
        .await
        .unwrap();
    assert_eq!(report.hostname, "idrac-1");
    match report.body {
        ReportBody::StorageHealth { controllers } => {
            assert_eq!(controllers.len(), 1);
            assert_eq!(controllers[0].name, "PERC H740P Mini");
            assert_eq!(controllers[0].drives_count, 1);
            assert_eq!(controllers[0].drives[0].media_type.as_deref(), Some("SSD"));
        }
        other => panic!("unexpected report body: {other:?}"),
    }
}

#[tokio::test]
async fn controllers_report_returns_inventory_detail() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        SYSTEM_PATH,
        common::system_body("System.Embedded.1", "On"),
    )
    .await;
    common::mount_get(
        &server,
        &format!("{SYSTEM_PATH}/Storage"),
        common::storage_collection_body(SYSTEM_PATH),
    )
    .await;
    common::mount_get(
        &server,
        &format!("{SYSTEM_PATH}/Storage/RAID.Integrated.1-1"),
        common::controller_body(SYSTEM_PATH),
    )
    .await;

    let client = client_for(&server);
    let report = assemble_report(&client, ReportKind::Controllers).await.unwrap();
    match report.body {
        ReportBody::Controllers { controllers } => {
            assert_eq!(controllers.len(), 1);
            assert_eq!(
                controllers[0].description.as_deref(),
                Some("Integrated RAID Controller")
            );
            assert_eq!(controllers[0].drives_count, Some(1));
        }
        other => panic!("unexpected report body: {other:?}"),
    }
}

#[tokio::test]
async fn storage_health_refused_when_powered_off() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        SYSTEM_PATH,
        common::system_body("System.Embedded.1", "Off"),
    )
    .await;

    let client = client_for(&server);
    let err = assemble_report(&client, ReportKind::StorageHealth { include_drives: false })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotPoweredOn { .. }));
}

#[tokio::test]
async fn set_power_state_posts_reset_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{SYSTEM_PATH}/Actions/ComputerSystem.Reset")))
        .and(body_json(json!({"ResetType": "GracefulRestart"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .set_power_state(ResetType::GracefulRestart)
        .await
        .unwrap();
}

#[tokio::test]
async fn reboot_defaults_to_graceful_restart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{SYSTEM_PATH}/Actions/ComputerSystem.Reset")))
        .and(body_json(json!({"ResetType": "GracefulRestart"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.reboot().await.unwrap();
}

#[tokio::test]
async fn set_boot_device_posts_boot_override() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SYSTEM_PATH))
        .and(body_json(json!({"Boot": {"BootSourceOverrideTarget": "Pxe"}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_boot_device("Pxe").await.unwrap();
}

#[tokio::test]
async fn event_log_reads_sel_entries() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        &format!("{SYSTEM_PATH}/LogServices/Sel/Entries"),
        common::event_log_body(),
    )
    .await;

    let client = client_for(&server);
    let entries = client.event_log().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity.as_deref(), Some("Critical"));
}

#[tokio::test]
async fn http_401_maps_to_authentication_error() {
    let server = MockServer::start().await;
    common::mount_get_status(&server, SYSTEM_PATH, 401).await;

    let client = client_for(&server);
    let err = client.system_info().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed { .. }));
    assert_eq!(err.kind(), "AuthenticationError");
}

#[tokio::test]
async fn http_403_maps_to_authorization_error() {
    let server = MockServer::start().await;
    common::mount_get_status(&server, SYSTEM_PATH, 403).await;

    let client = client_for(&server);
    let err = client.system_info().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthorizationDenied { .. }));
}

#[tokio::test]
async fn http_404_maps_to_not_found() {
    let server = MockServer::start().await;
    common::mount_get_status(&server, SYSTEM_PATH, 404).await;

    let client = client_for(&server);
    let err = client.system_info().await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SYSTEM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.system_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}
