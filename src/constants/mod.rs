pub struct Env {
    pub jwt_secret: String,
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_service_key: String,
    pub storage_bucket: String,
    pub max_file_size: usize,
    pub login_email: String,
    pub login_password: String,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        let jwt_secret = std::env::var("SUPABASE_JWT_SECRET")
            .expect("SUPABASE_JWT_SECRET must be set in .env file or environment variable");

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let supabase_url =
            std::env::var("SUPABASE_URL").unwrap_or_else(|_| "http://kong:8000".to_string());
        let supabase_service_key = std::env::var("SUPABASE_SERVICE_KEY")
            .expect("SUPABASE_SERVICE_KEY must be set in .env file or environment variable");

        let storage_bucket =
            std::env::var("SUPABASE_STORAGE_BUCKET").unwrap_or_else(|_| "files".to_string());
        let max_file_size = std::env::var("MAX_FILE_SIZE")
            .unwrap_or_else(|_| (100 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_FILE_SIZE must be a valid usize integer");

        let login_email =
            std::env::var("LOGIN_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
        let login_password =
            std::env::var("LOGIN_PASSWORD").unwrap_or_else(|_| "changeme".to_string());

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        Env {
            jwt_secret,
            database_url,
            supabase_url,
            supabase_service_key,
            storage_bucket,
            max_file_size,
            login_email,
            login_password,
            frontend_url,
            ip,
            port,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
