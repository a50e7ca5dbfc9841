use wiresearch::*;

fn main() -> Result<()> {
    // 1. Configure the query language
    let config = QueryConfig::builder()
        .case_sensitive(false)
        .protect_phrases(true)
        .build();

    // 2. Normalize and compile the query
    let query_str = r#"cats AND (dogs OR -fish) "cats and dogs""#;
    let query = SearchQuery::try_new(query_str, &config)?;
    println!("Normalized: {}", query.normalized());
    println!("Program: {}", query.program());

    // 3. Evaluate against strings with the built-in text matcher
    let candidates = ["cats and dogs", "cats and fish", "dogs only", "Cats And Dogs"];
    let matcher = TextMatcher::new(&candidates, config.case_sensitive);
    let found = query.evaluate(&matcher)?;
    println!("Text matches: {:?}", found);

    // 4. Evaluate against anything else with a closure matcher
    let ids = [(1, "cats"), (2, "dogs"), (3, "fish")];
    let by_name = |keyword: &str, _exact: bool, include: bool| {
        ids.iter()
            .filter(|(_, name)| (*name == keyword) == include)
            .map(|(id, _)| *id)
            .collect::<Vec<u32>>()
    };
    match SearchQuery::new("cats OR dogs").evaluate(&by_name) {
        Ok(ids) => println!("Id matches: {:?}", ids),
        Err(e) => println!("Query error: {}", e),
    }
    Ok(())
}
