use platform_backend::utils::password::PasswordManager;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let password = if args.len() > 1 {
        // コマンドライン引数からパスワードを取得
        args[1].clone()
    } else {
        // インタラクティブにパスワードを入力
        print!("Enter password to hash: ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut password = String::new();
        if let Err(e) = io::stdin().read_line(&mut password) {
            eprintln!("Error reading password: {}", e);
            return ExitCode::FAILURE;
        }
        password.trim().to_string()
    };

    if password.is_empty() {
        eprintln!("Error: Password cannot be empty");
        return ExitCode::FAILURE;
    }

    // ARGON2_* の設定をサーバーと共有する
    let manager = match PasswordManager::from_env() {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error: invalid Argon2 configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match manager.hash_password(&password) {
        Ok(password_hash) => {
            println!("\n=== Password Hash Generated ===");
            println!("Hash: {}", password_hash);
            println!("\nTo create a user manually:");
            println!(
                "INSERT INTO users (username, password_hash, role, created_at) VALUES ('<username>', '{}', '<role>', CURRENT_TIMESTAMP);",
                password_hash
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error generating password hash: {}", e);
            ExitCode::FAILURE
        }
    }
}
