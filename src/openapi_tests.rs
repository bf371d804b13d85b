#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::{schema::Schema, PathItemType, RefOr};
    use utoipa::OpenApi;

    fn object_properties(name: &str) -> Vec<String> {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.properties.keys().cloned().collect(),
            _ => panic!("{} should be an object schema", name),
        }
    }

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for name in [
            "ErrorResponse",
            "HealthResponse",
            "Receipt",
            "OrderDto",
            "ClientDto",
            "DashboardStats",
            "LoginForm",
        ] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let properties = object_properties("ErrorResponse");
        for field in ["error", "code", "success"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_receipt_schema_structure() {
        let properties = object_properties("Receipt");
        for field in ["order_id", "client_id", "furniture_type", "material", "area", "price"] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_dashboard_schema_structure() {
        let properties = object_properties("DashboardStats");
        for field in [
            "total_orders",
            "total_revenue",
            "new_count",
            "in_work_count",
            "production_count",
            "done_count",
        ] {
            assert!(properties.iter().any(|p| p == field), "missing {}", field);
        }
    }

    #[test]
    fn test_openapi_paths_are_documented() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/health",
            "/calc",
            "/orders",
            "/order/{order_id}/status/{status}",
            "/dashboard",
            "/export",
        ] {
            let item = openapi
                .paths
                .paths
                .get(path)
                .unwrap_or_else(|| panic!("missing path {}", path));
            assert!(item.operations.contains_key(&PathItemType::Get), "{} has no GET", path);
        }

        let login = openapi.paths.paths.get("/login").expect("missing /login");
        assert!(login.operations.contains_key(&PathItemType::Post));
    }

    #[test]
    fn test_calc_documents_bad_request() {
        let openapi = ApiDoc::openapi();
        let calc = openapi.paths.paths.get("/calc").unwrap();
        let get = calc.operations.get(&PathItemType::Get).unwrap();

        assert!(get.responses.responses.contains_key("200"));
        assert!(get.responses.responses.contains_key("400"));

        let params: Vec<&str> = get
            .parameters
            .as_ref()
            .expect("query parameters")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        for name in ["name", "phone", "city", "width", "height", "type", "material"] {
            assert!(params.contains(&name), "missing parameter {}", name);
        }
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi = ApiDoc::openapi();
        let openapi_json = serde_json::to_string(&openapi).unwrap();

        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("#/components/schemas/ErrorResponse"));
    }
}
