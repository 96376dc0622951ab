//! モデル定義
//!
//! docker-compose.yml 生成で使用されるデータモデルを定義します。
//! 入力（フラグ・ボリューム）と中間表現（サービス・ドキュメント）を
//! 機能ごとにモジュールに分離しています。

mod compose;
mod flags;
mod platform;
mod service;
mod volume;

// Re-exports
pub use compose::*;
pub use flags::*;
pub use platform::*;
pub use service::*;
pub use volume::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_document_json_shape() {
        let document = ComposeDocument {
            services: vec![ServiceDefinition {
                service_name: "nginx".to_string(),
                image: "easyengine/nginx:v4.1.0".to_string(),
                restart: RestartPolicy::Always,
                environment: vec!["HSTS=off".to_string()],
                volumes: vec![MountEntry {
                    name: "htdocs".to_string(),
                    path_to: "/var/www".to_string(),
                }],
                labels: vec![],
                sysctls: vec![],
                networks: vec!["site-network".to_string()],
            }],
            network: NetworkBlock {
                labels: vec!["org.label-schema.vendor=EasyEngine".to_string()],
                subnet_ip: "10.0.0.0/24".to_string(),
            },
            external_volumes: None,
        };

        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(json["services"][0]["service_name"], "nginx");
        assert_eq!(json["services"][0]["restart"], "always");
        assert_eq!(json["services"][0]["volumes"][0]["path_to"], "/var/www");
        assert_eq!(json["network"]["subnet_ip"], "10.0.0.0/24");
        assert!(json["external_volumes"].is_null());
    }
}
