use anyhow::Result;
use rs_pet_help_svc::gemini::{AdviceModel, DEFAULT_MODEL, GeminiClient};
use rs_pet_help_svc::handlers::build_advice_prompt;

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Gemini Pet Advice Smoke Test");
    println!("{}", "=".repeat(50));

    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|e| anyhow::anyhow!("GEMINI_API_KEY not set: {}", e))?;
    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    println!("🔧 Model: {}", model);

    let client = GeminiClient::new(api_key, model);
    let prompt = build_advice_prompt(
        "my dog is limping and will not put weight on the front leg",
        25.03,
        121.56,
    );

    println!("📨 Prompt:");
    println!("{}", "─".repeat(60));
    println!("{}", prompt);
    println!("{}", "─".repeat(60));

    match client.generate_advice(&prompt).await {
        Ok(reply) => {
            println!("✅ Model replied ({} bytes)", reply.len());
            println!("{}", "─".repeat(60));
            println!("{}", reply);
            println!("{}", "─".repeat(60));

            // The handler never parses this; check by hand that it is the
            // advice/mapUrl object the prompt asked for.
            match serde_json::from_str::<serde_json::Value>(&reply) {
                Ok(value) => {
                    println!("📋 Parsed as JSON:");
                    println!("   advice: {}", value["advice"]);
                    println!("   mapUrl: {}", value["mapUrl"]);
                }
                Err(e) => println!("⚠️  Reply is not valid JSON: {}", e),
            }
        }
        Err(error) => {
            println!("❌ Request failed: {}", error);

            // Check for common issues
            let error_str = error.to_string();
            if error_str.contains("API_KEY_INVALID") || error_str.contains("API key not valid") {
                println!("💡 Hint: The API key might be invalid");
                println!("   Create one at: https://aistudio.google.com/app/apikey");
            } else if error_str.contains("429") || error_str.contains("RESOURCE_EXHAUSTED") {
                println!("💡 Hint: API quota exceeded. The free tier allows a limited number of requests per day");
            } else if error_str.contains("NOT_FOUND") {
                println!("💡 Hint: The model name might be wrong. Try: {}", DEFAULT_MODEL);
            }
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("🏁 Smoke test completed!");

    Ok(())
}
