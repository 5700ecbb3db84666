use super::*;

#[test]
fn response_ok_covers_2xx_only() {
    assert!(ApiResponse::new(200, "").ok());
    assert!(ApiResponse::new(204, "").ok());
    assert!(!ApiResponse::new(199, "").ok());
    assert!(!ApiResponse::new(301, "").ok());
    assert!(!ApiResponse::new(401, "").ok());
}

#[test]
fn header_value_is_case_insensitive() {
    let request = ApiRequest::new(Method::Get, "http://api/alunos").header("Authorization", "Bearer abc");
    assert_eq!(request.header_value("authorization"), Some("Bearer abc"));
    assert_eq!(request.header_value("x-missing"), None);
}

#[test]
fn request_defaults_to_empty_body() {
    let request = ApiRequest::new(Method::Delete, "http://api/alunos/3");
    assert_eq!(request.body, RequestBody::Empty);
    assert!(request.headers.is_empty());
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[tokio::test]
async fn offline_transport_always_fails() {
    let err = OfflineTransport
        .send(ApiRequest::new(Method::Get, "http://api/alunos"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("GET http://api/alunos"));
}
