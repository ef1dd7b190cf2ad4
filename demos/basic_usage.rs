// ============================================================================
// Basic Usage Example
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;
use token_units::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    token_units::utils::logging::init_tracing(tracing::Level::TRACE)
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    println!("=== Token Units Example ===\n");

    // Record the transaction carrying the swap
    let store = InMemoryTransactionStore::new();
    let context = BlockContext::new(
        "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
        46_147,
        1_438_918_233,
        50_000_000_000_000u64,
    );
    let record = upsert_transaction(&store, &context);
    println!(
        "Transaction {} at block {} ({:?})",
        record.id,
        record.block_number,
        record.timestamp_utc()
    );

    // Raw amounts from the swap event
    let weth_in = raw_to_decimal(&BigInt::from_str("2500000000000000000")?, 18u8)?;
    let usdc_out = raw_to_decimal(&BigInt::from(4_512_250_000u64), BigInt::from(6))?;
    println!("\nSwapped {} WETH for {} USDC", weth_in, usdc_out);

    let price = safe_divide_decimal(&usdc_out, &weth_in);
    println!("Execution price: {} USDC/WETH", price);

    // Pool fees, positional in the host's entity
    let tiers = vec![
        FeeTier::new("trading", BigDecimal::from_str("0.25")?),
        FeeTier::new("protocol", BigDecimal::from_str("0.05")?),
    ];
    let schedule = FeeSchedule::from_ordered(&tiers)?;
    let split = schedule.split(&usdc_out);
    println!("\n=== Fees ===");
    println!("Trading fee:  {} USDC", split.trading_fee);
    println!("Protocol fee: {} USDC", split.protocol_fee);
    println!("Total:        {} USDC", split.total());

    // Fee tier encoded as integer fee units (3000 = 0.3%)
    println!("\nFee units 3000 -> {}", fee_units_to_fraction(3000));

    // Empty pool: no division error
    let empty_reserve = BigDecimal::from(0);
    println!("Price in empty pool: {}", safe_divide_decimal(&usdc_out, &empty_reserve));

    // Out-of-contract decimals are rejected
    match raw_to_decimal(&BigInt::from(1), -6i32) {
        Ok(value) => println!("Unexpected value: {}", value),
        Err(e) => println!("Negative decimals rejected: {}", e),
    }

    let ids = normalize_case(vec![
        "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".to_string(),
        "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
    ]);
    println!("\nNormalized ids: {:?}", ids);

    Ok(())
}
