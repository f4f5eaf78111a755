//! Prompt templates for the LLM-backed advisory provider.
//!
//! Each template instructs the model to answer with a JSON object matching
//! the operation's output schema so the response can be validated with
//! `serde_json`.

use crate::models::{AdviceInput, FaresInput, HotelsInput, PlacesInput, TravelSafetyInput};

pub fn personalized_advice(input: &AdviceInput) -> String {
    format!(
        "You are a helpful assistant providing personalized advice based on \
         the current weather conditions.\n\n\
         Current conditions:\n\
         - Temperature: {temperature}°C\n\
         - Humidity: {humidity}%\n\
         - Wind speed: {wind} km/h\n\
         - Weather: {description}\n\n\
         Provide a single sentence of personalized advice. For example, if it \
         is cold, tell the user to wear a jacket; if it is raining, to bring \
         an umbrella.\n\n\
         Answer with a JSON object: {{\"advice\": string}}",
        temperature = input.temperature_c,
        humidity = input.humidity_pct,
        wind = input.wind_kph,
        description = input.description,
    )
}

pub fn travel_safety(input: &TravelSafetyInput) -> String {
    format!(
        "You are a travel safety advisor. Based on the weather conditions \
         below, provide a concise travel suggestion and a safety level.\n\n\
         - Temperature: {temperature}°C\n\
         - Wind speed: {wind} km/h\n\
         - Weather: {description}\n\n\
         Consider extreme temperatures, high winds, and hazardous conditions \
         such as thunderstorms or snow. Keep the suggestion to one sentence.\n\n\
         Answer with a JSON object: {{\"suggestion\": string, \
         \"safety_level\": \"Safe\" | \"Caution\" | \"Dangerous\"}}",
        temperature = input.temperature_c,
        wind = input.wind_kph,
        description = input.description,
    )
}

pub fn suggest_places(input: &PlacesInput) -> String {
    format!(
        "You are a helpful travel assistant. Suggest up to three interesting \
         places to visit near the city below, appropriate for the current \
         weather: indoor activities such as museums or cafes when it rains, \
         outdoor activities such as parks or landmarks when it is sunny.\n\n\
         City: {city}\n\
         Weather: {description}\n\n\
         Answer with a JSON object: {{\"places\": [{{\"name\": string, \
         \"description\": one sentence, \"ideal_weather\": \"Sunny\" | \
         \"Cloudy\" | \"Partly cloudy\" | \"Rain\" | \"Thunderstorm\" | \
         \"Snow\"}}]}} with at most three entries.",
        city = input.city,
        description = input.description,
    )
}

pub fn suggest_hotels(input: &HotelsInput) -> String {
    format!(
        "You are a helpful travel assistant. Suggest up to three hotels in \
         the city below. For each hotel give a name, an estimated price per \
         night in the specified currency, and a one-sentence description.\n\n\
         City: {city}\n\
         Currency: {currency}\n\n\
         Answer with a JSON object: {{\"hotels\": [{{\"name\": string, \
         \"price\": number, \"description\": string}}]}} with at most three \
         entries.",
        city = input.city,
        currency = input.currency,
    )
}

pub fn estimate_fares(input: &FaresInput) -> String {
    format!(
        "You are a travel agent providing fare estimates. Estimate the \
         average one-way fare for both a flight and a train ticket to the \
         destination below from a major nearby hub, in the requested \
         currency. Also suggest up to three popular airlines flying there.\n\n\
         Destination: {city}\n\
         Currency: {currency}\n\n\
         Provide a reasonable, non-zero flight fare. If train travel to this \
         city is not common or practical, set the train fare to 0.\n\n\
         Answer with a JSON object: {{\"flight_fare\": number, \
         \"train_fare\": number, \"flight_companies\": [string]}}",
        city = input.city,
        currency = input.currency,
    )
}
