use actix_web::{test, web, App};
use harmony_wheel::api::{configure, AppContext};
use harmony_wheel::config::Config;
use serde_json::Value;

fn context() -> web::Data<AppContext> {
    web::Data::new(AppContext::new(Config::default()).expect("default config is valid"))
}

async fn get(uri: &str) -> (u16, String) {
    let app = test::init_service(App::new().app_data(context()).configure(configure)).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[actix_web::test]
async fn palette_json_complementary() {
    let (status, body) = get("/palette.json?color=%23ff0000&scheme=complementary").await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["scheme"], "complementary");
    assert_eq!(json["base"]["h"], 0);
    assert_eq!(json["base"]["s"], 100);
    assert_eq!(json["base"]["l"], 50);
    let hexes: Vec<&str> = json["colors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["hex"].as_str().unwrap())
        .collect();
    assert_eq!(hexes, vec!["#ff0000", "#00ffff"]);
}

#[actix_web::test]
async fn palette_json_defaults() {
    let (status, body) = get("/palette.json").await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["scheme"], "complementary");
    assert_eq!(json["colors"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn palette_json_rejects_bad_input() {
    let (status, body) = get("/palette.json?color=nope").await;
    assert_eq!(status, 400);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("nope"));

    let (status, body) = get("/palette.json?scheme=square").await;
    assert_eq!(status, 400);
    assert!(body.contains("unknown harmony scheme"));
}

#[actix_web::test]
async fn wheel_svg_has_sectors_and_markers() {
    let (status, body) = get("/wheel.svg?color=%23ff0000&scheme=triadic").await;
    assert_eq!(status, 200);
    assert_eq!(body.matches("<path ").count(), 360);
    // base marker plus three palette markers
    assert_eq!(body.matches("<circle ").count(), 4);
    assert!(body.contains("hsl(180, 100%, 50%)"));
}

#[actix_web::test]
async fn page_renders_swatches() {
    let (status, body) = get("/?color=%23ff0000&scheme=tetradic").await;
    assert_eq!(status, 200);
    assert_eq!(body.matches("class=\"color-card\"").count(), 4);
    assert!(body.contains("navigator.clipboard.writeText"));
    assert!(body.contains("#80ff00"));
}

#[actix_web::test]
async fn page_keeps_last_color_on_invalid_input() {
    let (status, body) = get("/?last=%23ff0000&color=%23zzzzzz&scheme=complementary").await;
    assert_eq!(status, 200);
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("value=\"#ff0000\""));
    assert!(body.contains("#00ffff"));
}

#[actix_web::test]
async fn page_applies_wheel_click() {
    // bottom of a 350px wheel is hue 90
    let (status, body) =
        get("/?last=%23ff0000&color=%23ff0000&scheme=complementary&pick.x=175&pick.y=300").await;
    assert_eq!(status, 200);
    assert!(body.contains("value=\"#80ff00\""));
    assert!(!body.contains("class=\"error\""));
}

#[actix_web::test]
async fn page_ignores_click_outside_wheel() {
    let (status, body) =
        get("/?last=%23ff0000&color=%23ff0000&scheme=complementary&pick.x=1&pick.y=1").await;
    assert_eq!(status, 200);
    assert!(body.contains("value=\"#ff0000\""));
}

#[actix_web::test]
async fn page_rejects_unknown_scheme() {
    let (status, _) = get("/?scheme=split").await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn page_ignores_non_numeric_click() {
    let (status, body) =
        get("/?last=%2300ff00&color=%2300ff00&scheme=complementary&pick.x=NaN&pick.y=NaN").await;
    assert_eq!(status, 200);
    assert!(body.contains("value=\"#00ff00\""));
}
