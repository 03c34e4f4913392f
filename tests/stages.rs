use std::cmp::Ordering;

use gamer::{
    ast::{BinaryOperator, Extremum, Instruction, Literal, Operand, UnaryOperator},
    config::{Action, KeywordTable},
    error::{ConfigError, RuntimeError, SemanticError, SyntaxError},
    interpreter::{
        evaluator::{binary::eval_binary, core::evaluate, min_max::min_max},
        lexer::{Token, TokenKind, tokenize},
        parser::parse_instruction,
        semantic::validate,
        session::Interpreter,
        symbols::SymbolTable,
        value::Value,
    },
};

fn kinds(line: &str) -> Vec<TokenKind> {
    tokenize(line, &KeywordTable::default()).into_iter()
                                            .map(|token| token.kind)
                                            .collect()
}

fn parse(line: &str) -> Result<Instruction, SyntaxError> {
    let keywords = KeywordTable::default();
    parse_instruction(&tokenize(line, &keywords), &keywords)
}

#[test]
fn tokenize_definition() {
    let tokens = Interpreter::new().tokenize("crear vida = 100")
                                   .iter()
                                   .map(ToString::to_string)
                                   .collect::<Vec<_>>();

    assert_eq!(tokens, ["KEYWORD:crear", "IDENTIFIER:vida", "EQUALS:=", "NUMBER:100"]);
}

#[test]
fn tokenize_unknown_symbol() {
    let tokens = tokenize("crear vida @ 100", &KeywordTable::default());

    assert_eq!(tokens[2], Token::new(TokenKind::Unknown, "@"));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn tokenize_numbers_and_decimals() {
    assert_eq!(kinds("-50 3.14 -0.5 42"),
               [TokenKind::Number, TokenKind::Decimal, TokenKind::Decimal, TokenKind::Number]);
    assert_eq!(kinds("3. .5 100abc"),
               [TokenKind::Unknown, TokenKind::Unknown, TokenKind::Unknown]);
}

#[test]
fn tokenize_quoted_text() {
    let tokens = tokenize("crear s = \"Hola  Mundo\"", &KeywordTable::default());
    assert_eq!(tokens[3], Token::new(TokenKind::String, "Hola  Mundo"));

    let tokens = tokenize("crear s = \"\"", &KeywordTable::default());
    assert_eq!(tokens[3], Token::new(TokenKind::String, ""));
}

#[test]
fn tokenize_unterminated_quote_runs_to_end_of_line() {
    let tokens = tokenize("crear s = \"hola mundo", &KeywordTable::default());

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[3], Token::new(TokenKind::Unknown, "\"hola mundo"));
}

#[test]
fn tokenize_lowercases_words_but_keeps_unknown_lexemes() {
    let tokens = tokenize("GOLPEAR Vida DAÑO Ab$C", &KeywordTable::default());

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Keyword, "golpear"),
                    Token::new(TokenKind::Identifier, "vida"),
                    Token::new(TokenKind::Identifier, "daño"),
                    Token::new(TokenKind::Unknown, "Ab$C")]);
}

#[test]
fn identifiers_take_decimal_digits_only() {
    let tokens = tokenize("decir x² nivel_2 poción٣", &KeywordTable::default());

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Keyword, "decir"),
                    Token::new(TokenKind::Unknown, "x²"),
                    Token::new(TokenKind::Identifier, "nivel_2"),
                    Token::new(TokenKind::Identifier, "poción٣")]);
    assert!(Interpreter::new().evaluate("crear x² = 4").is_err());
}

#[test]
fn tokenize_never_fails() {
    assert!(tokenize("", &KeywordTable::default()).is_empty());
    assert!(tokenize(" \t ", &KeywordTable::default()).is_empty());
    assert_eq!(kinds("¿? == ="), [TokenKind::Unknown, TokenKind::Unknown, TokenKind::Equals]);
}

#[test]
fn parse_every_template() {
    assert_eq!(parse("crear nombre = \"link\"").unwrap(),
               Instruction::Define { name:  "nombre".to_string(),
                                     value: Operand::Literal(Literal::Text("link".to_string())), });
    assert_eq!(parse("curar vida pocion").unwrap(),
               Instruction::Binary { op:    BinaryOperator::Add,
                                     left:  Operand::variable("vida"),
                                     right: Operand::variable("pocion"), });
    assert_eq!(parse("poder 2 0.5").unwrap(),
               Instruction::Binary { op:    BinaryOperator::Power,
                                     left:  Operand::number("2"),
                                     right: Operand::Literal(Literal::Decimal("0.5".to_string())), });
    assert_eq!(parse("revivir vida").unwrap(),
               Instruction::Unary { op:   UnaryOperator::SquareRoot,
                                    name: "vida".to_string(), });
    assert_eq!(parse("xp vida").unwrap(),
               Instruction::Unary { op:   UnaryOperator::Absolute,
                                    name: "vida".to_string(), });
    assert_eq!(parse("esbirro a b c").unwrap(),
               Instruction::Extremum { op:    Extremum::Minimum,
                                       names: vec!["a".to_string(), "b".to_string(), "c".to_string()], });
    assert_eq!(parse("decir vida").unwrap(), Instruction::Print { name: "vida".to_string() });
}

#[test]
fn parse_rejections() {
    assert_eq!(parse(""), Err(SyntaxError::Empty));
    assert_eq!(parse("vida curar"),
               Err(SyntaxError::UnknownInstruction { lexeme: "vida".to_string() }));
    assert!(matches!(parse("golpear vida 10"),
                     Err(SyntaxError::InvalidSyntax { keyword, .. }) if keyword == "golpear"));
    assert!(matches!(parse("decir"), Err(SyntaxError::InvalidSyntax { .. })));
    assert!(matches!(parse("crear = vida 1"), Err(SyntaxError::InvalidSyntax { .. })));
}

#[test]
fn semantic_registers_definition() {
    let mut symbols = SymbolTable::new();
    let define = Instruction::Define { name:  "vida".to_string(),
                                       value: Operand::number("100"), };

    assert_eq!(validate(&define, &mut symbols), Ok(()));
    assert_eq!(symbols.get("vida"), Some(&Value::Integer(100)));
    assert_eq!(validate(&define, &mut symbols),
               Err(SemanticError::AlreadyDefined { name: "vida".to_string() }));
}

#[test]
fn semantic_checks_existence_before_domain() {
    let mut symbols = SymbolTable::new();
    let division = Instruction::Binary { op:    BinaryOperator::Divide,
                                         left:  Operand::variable("oro"),
                                         right: Operand::number("0"), };

    assert_eq!(validate(&division, &mut symbols),
               Err(SemanticError::UnknownVariable { name: "oro".to_string() }));

    symbols.insert("oro", Value::Integer(10));
    assert_eq!(validate(&division, &mut symbols), Err(SemanticError::DivisionByZero));
}

#[test]
fn semantic_leaves_table_untouched_on_failure() {
    let mut symbols = SymbolTable::new();
    let define = Instruction::Define { name:  "copia".to_string(),
                                       value: Operand::variable("nada"), };

    assert!(validate(&define, &mut symbols).is_err());
    assert!(symbols.is_empty());
}

#[test]
fn evaluation_of_validated_definition_matches_registration() {
    let mut symbols = SymbolTable::new();
    symbols.insert("vida", Value::Integer(100));

    for (name, value) in [("copia", Operand::variable("vida")),
                          ("grande", Operand::number("9223372036854775807")),
                          ("escudo", Operand::Literal(Literal::Decimal("-0.25".to_string()))),
                          ("grito", Operand::Literal(Literal::Text("¡ya!".to_string())))]
    {
        let define = Instruction::Define { name: name.to_string(),
                                           value };

        validate(&define, &mut symbols).unwrap();
        let registered = symbols.get(name).cloned();
        let outcome = evaluate(&define, &mut symbols).unwrap();

        assert_eq!(Some(outcome.value()), registered.as_ref());
        assert_eq!(symbols.get(name), registered.as_ref());
    }

    assert_eq!(symbols.len(), 5);
}

#[test]
fn evaluate_stores_definition() {
    let mut symbols = SymbolTable::new();
    let define = Instruction::Define { name:  "escudo".to_string(),
                                       value: Operand::Literal(Literal::Decimal("2.5".to_string())), };

    let outcome = evaluate(&define, &mut symbols).unwrap();

    assert_eq!(outcome.value(), &Value::Float(2.5));
    assert_eq!(outcome.to_string(), "Variable 'escudo' defined with value 2.5");
    assert_eq!(symbols.get("escudo"), Some(&Value::Float(2.5)));
}

#[test]
fn evaluator_rechecks_what_validators_guarantee() {
    let mut symbols = SymbolTable::new();

    assert_eq!(evaluate(&Instruction::Print { name: "nada".to_string() }, &mut symbols),
               Err(RuntimeError::UnknownVariable { name: "nada".to_string() }));

    symbols.insert("vida", Value::Integer(-9));
    let root = Instruction::Unary { op:   UnaryOperator::SquareRoot,
                                    name: "vida".to_string(), };
    assert_eq!(evaluate(&root, &mut symbols), Err(RuntimeError::NegativeRadicand));

    assert_eq!(eval_binary(BinaryOperator::Divide, &Value::Integer(1), &Value::Float(0.0)),
               Err(RuntimeError::DivisionByZero));
}

#[test]
fn evaluator_number_edges() {
    assert_eq!(eval_binary(BinaryOperator::Multiply, &Value::Float(1e308), &Value::Integer(10)),
               Err(RuntimeError::NonFiniteResult));
    assert_eq!(eval_binary(BinaryOperator::Add, &Value::Integer(i64::MAX), &Value::Float(1.0)),
               Ok(Value::Float(9_223_372_036_854_775_808.0)));
    assert_eq!(Value::Integer(i64::MIN).abs(), Err(RuntimeError::Overflow));
    assert_eq!(eval_binary(BinaryOperator::Subtract, &Value::Integer(3), &Value::Integer(5)),
               Ok(Value::Integer(-2)));
}

#[test]
fn min_max_edges() {
    assert_eq!(min_max(Extremum::Maximum, &[]), Err(RuntimeError::MissingOperand));
    assert_eq!(min_max(Extremum::Minimum, &[Value::Float(-0.5), Value::Integer(-1)]),
               Ok(Value::Integer(-1)));
}

#[test]
fn value_display_and_comparison() {
    assert_eq!(Value::Float(25.0).to_string(), "25.0");
    assert_eq!(Value::Integer(25).to_string(), "25");
    assert_eq!(Value::from("hola").to_string(), "hola");
    assert_eq!(Value::Integer(i64::MAX).numeric_cmp(&Value::Integer(i64::MAX - 1)),
               Ok(Ordering::Greater));
}

#[test]
fn mixed_comparison_never_rounds_the_integer() {
    let above = Value::Integer(9_007_199_254_740_993);
    let rounded = Value::Float(9_007_199_254_740_992.0);

    assert_eq!(above.numeric_cmp(&rounded), Ok(Ordering::Greater));
    assert_eq!(rounded.numeric_cmp(&above), Ok(Ordering::Less));
    assert_eq!(Value::Float(-0.5).numeric_cmp(&Value::Integer(0)), Ok(Ordering::Less));
    assert_eq!(Value::Integer(i64::MIN).numeric_cmp(&Value::Float(-1e19)), Ok(Ordering::Greater));
    assert_eq!(min_max(Extremum::Maximum, &[rounded, above.clone()]), Ok(above));
}

#[test]
fn default_keyword_table() {
    let table = KeywordTable::default();

    assert_eq!(table.len(), 11);
    assert_eq!(table.action("crear"), Some(Action::DefineVariable));
    assert_eq!(table.action("jefe"), Some(Action::Maximum));
    assert_eq!(table.action("CREAR"), None);
    assert_eq!(table.entries().first(), Some(&("crear", Action::DefineVariable)));
}

#[test]
fn keyword_table_parsing() {
    let table: KeywordTable = "\n# comment\n  Make =  DEFINE \n".parse().unwrap();
    assert_eq!(table.action("make"), Some(Action::DefineVariable));
    assert_eq!(table.len(), 1);

    assert_eq!("make define".parse::<KeywordTable>(),
               Err(ConfigError::MalformedEntry { line: 1 }));
    assert_eq!("make = define\nshow = shout".parse::<KeywordTable>(),
               Err(ConfigError::UnknownAction { name: "shout".to_string(),
                                                line: 2, }));
    assert_eq!("5x = add".parse::<KeywordTable>(),
               Err(ConfigError::InvalidKeyword { keyword: "5x".to_string(),
                                                 line:    1, }));
    assert_eq!("two words = add".parse::<KeywordTable>(),
               Err(ConfigError::InvalidKeyword { keyword: "two words".to_string(),
                                                 line:    1, }));
    assert_eq!("make = define\nMAKE = print".parse::<KeywordTable>(),
               Err(ConfigError::DuplicateKeyword { keyword: "make".to_string(),
                                                   line:    2, }));
}

#[test]
fn action_names_round_trip_through_display() {
    for (_, action) in KeywordTable::default().entries() {
        assert_eq!(action.to_string().parse::<Action>(), Ok(action));
    }
}
