fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");
	println!("cargo:rustc-env=CARGO_PROFILE_DEV_BUILD_OVERRIDE_DEBUG=true");

	// A `.env` next to the crate or in any parent works the same as exporting the variable.
	let dotenv = dotenvy::dotenv().ok();
	let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();

	println!("cargo:rustc-env=GEMINI_API_KEY={api_key}");
	println!("cargo:rerun-if-env-changed=GEMINI_API_KEY");
	match dotenv {
		Some(path) => println!("cargo:rerun-if-changed={}", path.display()),
		None => println!("cargo:rerun-if-changed=.env"),
	}
}
