#[cfg(test)]
mod integration_tests {
    use crate::handlers::auth::LoginForm;
    use crate::handlers::intake::CalcQuery;
    use crate::schemas::{ApiResponse, ErrorResponse, HealthResponse};
    use crate::session::SESSION_COOKIE;
    use crate::test_utils::test_utils::{setup_test_app, TEST_PASSWORD, TEST_USERNAME};
    use axum::http::{header, StatusCode};
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use calamine::{Data, Reader, Xlsx};
    use common::{DashboardStats, OrderDto, Receipt};
    use model::entities::{client, order};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Set,
    };
    use std::io::Cursor;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calc_query(material: &str, furniture_type: &str, width: &str, height: &str) -> CalcQuery {
        CalcQuery {
            name: "Aigerim".to_string(),
            phone: "+7 701 000 0000".to_string(),
            city: "Almaty".to_string(),
            width: width.to_string(),
            height: height.to_string(),
            furniture_type: furniture_type.to_string(),
            material: material.to_string(),
        }
    }

    async fn place_order(server: &TestServer, material: &str, furniture_type: &str) -> Receipt {
        let response = server
            .get("/calc")
            .add_query_params(calc_query(material, furniture_type, "2", "1.5"))
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Receipt> = response.json();
        body.data
    }

    async fn sign_in(server: &TestServer) -> Cookie<'static> {
        let response = server
            .post("/login")
            .form(&LoginForm {
                username: TEST_USERNAME.to_string(),
                password: TEST_PASSWORD.to_string(),
            })
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        response.cookie(SESSION_COOKIE)
    }

    fn read_sheet(bytes: &[u8]) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec())).expect("valid xlsx");
        let range = workbook.worksheet_range("Orders").expect("Orders sheet");
        range.rows().map(|row| row.to_vec()).collect()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (server, _) = setup_test_app().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "connected");
    }

    #[tokio::test]
    async fn test_landing_page_has_calculator() {
        let (server, _) = setup_test_app().await;

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let page = response.text();
        assert!(page.contains("action=\"/calc\""));
        assert!(page.contains("wardrobe"));
    }

    #[tokio::test]
    async fn test_calc_prices_and_stores_order() {
        let (server, state) = setup_test_app().await;

        let response = server
            .get("/calc")
            .add_query_params(calc_query("mdf", "wardrobe", "2", "1.5"))
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Receipt> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Order created successfully");
        assert_eq!(body.data.area, dec("3"));
        assert_eq!(body.data.price, dec("900"));
        assert_eq!(body.data.material, "mdf");
        assert_eq!(body.data.furniture_type, "wardrobe");

        let stored = order::Entity::find_by_id(body.data.order_id)
            .one(&state.db)
            .await
            .unwrap()
            .expect("order stored");
        assert_eq!(stored.status, order::OrderStatus::New);
        assert_eq!(stored.price, dec("900"));
        assert_eq!(stored.client_id, body.data.client_id);

        let stored_client = client::Entity::find_by_id(body.data.client_id)
            .one(&state.db)
            .await
            .unwrap()
            .expect("client stored");
        assert_eq!(stored_client.name, "Aigerim");
        assert_eq!(stored_client.city, "Almaty");
    }

    #[tokio::test]
    async fn test_receipt_matches_stored_order_for_long_dimensions() {
        let (server, state) = setup_test_app().await;
        let cookie = sign_in(&server).await;

        for (width, height) in [("1.23456789012345678", "3"), ("123456789.123456789", "7.77")] {
            let response = server
                .get("/calc")
                .add_query_params(calc_query("mdf", "wardrobe", width, height))
                .await;
            response.assert_status(StatusCode::OK);
            let receipt: ApiResponse<Receipt> = response.json();
            let receipt = receipt.data;

            let stored = order::Entity::find_by_id(receipt.order_id)
                .one(&state.db)
                .await
                .unwrap()
                .expect("order stored");
            assert_eq!(receipt.price, stored.price, "width {}", width);

            let listed: ApiResponse<Vec<OrderDto>> =
                server.get("/orders").add_cookie(cookie.clone()).await.json();
            let listed = listed
                .data
                .iter()
                .find(|o| o.id == receipt.order_id)
                .expect("order listed");
            assert_eq!(listed.price, receipt.price, "width {}", width);
        }

        let first = order::Entity::find()
            .order_by_asc(order::Column::Id)
            .one(&state.db)
            .await
            .unwrap()
            .unwrap();
        // 1.2346 x 3 x 250 x 1.2
        assert_eq!(first.price, dec("1111.14"));
    }

    #[tokio::test]
    async fn test_unknown_material_writes_nothing() {
        let (server, state) = setup_test_app().await;

        let response = server
            .get("/calc")
            .add_query_params(calc_query("glass", "wardrobe", "2", "1.5"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "UNKNOWN_MATERIAL");
        assert!(!body.success);

        assert_eq!(client::Entity::find().count(&state.db).await.unwrap(), 0);
        assert_eq!(order::Entity::find().count(&state.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_furniture_type_is_rejected() {
        let (server, state) = setup_test_app().await;

        let response = server
            .get("/calc")
            .add_query_params(calc_query("wood", "sofa", "1", "1"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "UNKNOWN_FURNITURE_TYPE");
        assert_eq!(client::Entity::find().count(&state.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_numeric_dimension_is_rejected() {
        let (server, state) = setup_test_app().await;

        let response = server
            .get("/calc")
            .add_query_params(calc_query("mdf", "wardrobe", "two", "1.5"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_DIMENSION");
        assert!(body.error.contains("width"));
        assert_eq!(order::Entity::find().count(&state.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_overlong_name_fails_validation() {
        let (server, state) = setup_test_app().await;

        let mut query = calc_query("mdf", "wardrobe", "2", "1.5");
        query.name = "x".repeat(101);
        let response = server.get("/calc").add_query_params(query).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(client::Entity::find().count(&state.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_repeat_customer_gets_new_client_row() {
        let (server, state) = setup_test_app().await;

        let first = place_order(&server, "ldsp", "cabinet").await;
        let second = place_order(&server, "ldsp", "cabinet").await;

        assert_ne!(first.client_id, second.client_id);
        assert_eq!(client::Entity::find().count(&state.db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_dashboard_without_orders_is_all_zero() {
        let (server, _) = setup_test_app().await;

        let response = server.get("/dashboard").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<DashboardStats> = response.json();
        assert_eq!(body.data, DashboardStats::default());
        assert_eq!(body.data.total_revenue, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_dashboard_counts_and_revenue() {
        let (server, _) = setup_test_app().await;

        // 900 + 2 x 1.5 x 150 x 1.0 = 1350
        let first = place_order(&server, "mdf", "wardrobe").await;
        place_order(&server, "ldsp", "cabinet").await;
        server
            .get(&format!("/order/{}/status/DONE", first.order_id))
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let body: ApiResponse<DashboardStats> = server.get("/dashboard").await.json();
        assert_eq!(body.data.total_orders, 2);
        assert_eq!(body.data.total_revenue, dec("1350"));
        assert_eq!(body.data.new_count, 1);
        assert_eq!(body.data.done_count, 1);
        assert_eq!(body.data.in_work_count, 0);
        assert_eq!(body.data.production_count, 0);
    }

    #[tokio::test]
    async fn test_orders_requires_sign_in() {
        let (server, _) = setup_test_app().await;

        let response = server.get("/orders").await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), "/login");
    }

    #[tokio::test]
    async fn test_wrong_password_shows_form_again() {
        let (server, _) = setup_test_app().await;

        let response = server
            .post("/login")
            .form(&LoginForm {
                username: TEST_USERNAME.to_string(),
                password: "wrong".to_string(),
            })
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(response.text().contains("action=\"/login\""));

        // Unknown users get the very same page
        let unknown = server
            .post("/login")
            .form(&LoginForm {
                username: "nobody".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        unknown.assert_status(StatusCode::OK);
        assert_eq!(unknown.text(), response.text());
    }

    #[tokio::test]
    async fn test_sign_in_then_list_orders() {
        let (server, _) = setup_test_app().await;
        let receipt = place_order(&server, "wood", "kitchen").await;

        let response = server
            .post("/login")
            .form(&LoginForm {
                username: TEST_USERNAME.to_string(),
                password: TEST_PASSWORD.to_string(),
            })
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), "/dashboard");
        let cookie = response.cookie(SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));

        let orders = server.get("/orders").add_cookie(cookie).await;
        orders.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<OrderDto>> = orders.json();
        assert_eq!(body.data.len(), 1);
        let listed = &body.data[0];
        assert_eq!(listed.id, receipt.order_id);
        assert_eq!(listed.status, "NEW");
        // 2 x 1.5 x 400 x 1.5
        assert_eq!(listed.price, dec("1800"));
        let listed_client = listed.client.as_ref().expect("client joined");
        assert_eq!(listed_client.name, "Aigerim");
        assert_eq!(listed_client.phone, "+7 701 000 0000");
    }

    #[tokio::test]
    async fn test_logout_ends_session() {
        let (server, _) = setup_test_app().await;
        let cookie = sign_in(&server).await;

        let response = server.get("/logout").add_cookie(cookie.clone()).await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), "/");

        let orders = server.get("/orders").add_cookie(cookie).await;
        orders.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(orders.header(header::LOCATION), "/login");
    }

    #[tokio::test]
    async fn test_forged_session_is_rejected() {
        let (server, _) = setup_test_app().await;

        let response = server
            .get("/orders")
            .add_cookie(Cookie::new(SESSION_COOKIE, "not-a-real-token"))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), "/login");
    }

    #[tokio::test]
    async fn test_status_change_shows_in_order_list() {
        let (server, _) = setup_test_app().await;
        let receipt = place_order(&server, "mdf", "wardrobe").await;
        let cookie = sign_in(&server).await;

        let response = server
            .get(&format!("/order/{}/status/PRODUCTION", receipt.order_id))
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(header::LOCATION), "/orders");

        let body: ApiResponse<Vec<OrderDto>> =
            server.get("/orders").add_cookie(cookie).await.json();
        assert_eq!(body.data[0].status, "PRODUCTION");
    }

    #[tokio::test]
    async fn test_invalid_status_leaves_order_untouched() {
        let (server, state) = setup_test_app().await;
        let receipt = place_order(&server, "mdf", "wardrobe").await;

        let response = server
            .get(&format!("/order/{}/status/CANCELLED", receipt.order_id))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "Invalid status");

        let stored = order::Entity::find_by_id(receipt.order_id)
            .one(&state.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, order::OrderStatus::New);
    }

    #[tokio::test]
    async fn test_status_labels_are_case_sensitive() {
        let (server, _) = setup_test_app().await;
        let receipt = place_order(&server, "mdf", "wardrobe").await;

        let response = server
            .get(&format!("/order/{}/status/done", receipt.order_id))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "Invalid status");
    }

    #[tokio::test]
    async fn test_status_can_jump_and_go_back() {
        let (server, state) = setup_test_app().await;
        let receipt = place_order(&server, "mdf", "wardrobe").await;

        for label in ["DONE", "NEW", "IN_WORK"] {
            server
                .get(&format!("/order/{}/status/{}", receipt.order_id, label))
                .await
                .assert_status(StatusCode::SEE_OTHER);
        }

        let stored = order::Entity::find_by_id(receipt.order_id)
            .one(&state.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, order::OrderStatus::InWork);
    }

    #[tokio::test]
    async fn test_status_change_on_missing_order_is_not_found() {
        let (server, _) = setup_test_app().await;

        let response = server.get("/order/4242/status/DONE").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_status_change_with_non_numeric_id_is_not_found() {
        let (server, _) = setup_test_app().await;

        for path in ["/order/abc/status/DONE", "/order/1.5/status/DONE"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            let body: ErrorResponse = response.json();
            assert_eq!(body.code, "NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_export_without_orders_is_header_only() {
        let (server, _) = setup_test_app().await;

        let response = server.get("/export").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(
            response.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"orders.xlsx\""
        );

        let rows = read_sheet(response.as_bytes());
        assert_eq!(rows.len(), 1);
        let header_row: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        assert_eq!(
            header_row,
            vec!["ID", "Client", "Phone", "City", "Type", "Material", "Width", "Height", "Price", "Status"]
        );
    }

    #[tokio::test]
    async fn test_export_has_one_row_per_order() {
        let (server, _) = setup_test_app().await;
        let first = place_order(&server, "mdf", "wardrobe").await;
        let second = place_order(&server, "ldsp", "kitchen").await;
        let third = place_order(&server, "wood", "cabinet").await;

        let response = server.get("/export").await;
        response.assert_status(StatusCode::OK);

        let rows = read_sheet(response.as_bytes());
        assert_eq!(rows.len(), 4);

        let ids: Vec<Data> = rows[1..].iter().map(|row| row[0].clone()).collect();
        assert_eq!(
            ids,
            vec![
                Data::Float(first.order_id as f64),
                Data::Float(second.order_id as f64),
                Data::Float(third.order_id as f64),
            ]
        );
        assert_eq!(rows[1][1], Data::String("Aigerim".to_string()));
        assert_eq!(rows[1][4], Data::String("wardrobe".to_string()));
        assert_eq!(rows[1][8], Data::Float(900.0));
        assert_eq!(rows[1][9], Data::String("NEW".to_string()));
    }

    #[tokio::test]
    async fn test_export_aborts_on_orphaned_order() {
        let (server, state) = setup_test_app().await;
        place_order(&server, "mdf", "wardrobe").await;

        state
            .db
            .execute_unprepared("PRAGMA foreign_keys = OFF;")
            .await
            .unwrap();
        order::ActiveModel {
            width: Set(dec("1")),
            height: Set(dec("1")),
            material: Set("mdf".to_string()),
            furniture_type: Set("cabinet".to_string()),
            price: Set(dec("250")),
            status: Set(order::OrderStatus::New),
            client_id: Set(999),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .unwrap();

        let response = server.get("/export").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "ORPHAN_ORDER");
    }

    #[tokio::test]
    async fn test_orders_listed_oldest_first() {
        let (server, state) = setup_test_app().await;
        for _ in 0..3 {
            place_order(&server, "ldsp", "cabinet").await;
        }
        let cookie = sign_in(&server).await;

        let body: ApiResponse<Vec<OrderDto>> =
            server.get("/orders").add_cookie(cookie).await.json();
        let listed: Vec<i32> = body.data.iter().map(|o| o.id).collect();

        let stored: Vec<i32> = order::Entity::find()
            .order_by_asc(order::Column::Id)
            .all(&state.db)
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(listed, stored);
    }
}
