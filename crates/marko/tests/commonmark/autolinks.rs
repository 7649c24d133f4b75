use crate::commonmark::harness::spec_test;

spec_test!(
    http_uri,
    "<http://foo.bar.baz>\n",
    "<p><a href=\"http://foo.bar.baz\">http://foo.bar.baz</a></p>\n"
);
spec_test!(
    irc_uri,
    "<irc://foo.bar:2233/baz>\n",
    "<p><a href=\"irc://foo.bar:2233/baz\">irc://foo.bar:2233/baz</a></p>\n"
);
spec_test!(
    uppercase_scheme,
    "<MAILTO:FOO@BAR.BAZ>\n",
    "<p><a href=\"MAILTO:FOO@BAR.BAZ\">MAILTO:FOO@BAR.BAZ</a></p>\n"
);
spec_test!(
    email_address,
    "<foo@bar.example.com>\n",
    "<p><a href=\"mailto:foo@bar.example.com\">foo@bar.example.com</a></p>\n"
);
spec_test!(
    plus_in_local_part,
    "<foo+special@Bar.baz-bar0.com>\n",
    "<p><a href=\"mailto:foo+special@Bar.baz-bar0.com\">foo+special@Bar.baz-bar0.com</a></p>\n"
);
spec_test!(
    spaces_are_not_allowed,
    "<http://foo.bar/baz bim>\n",
    "<p>&lt;http://foo.bar/baz bim&gt;</p>\n"
);
spec_test!(empty_angle_brackets, "<>\n", "<p>&lt;&gt;</p>\n");
spec_test!(
    plain_address_is_not_an_autolink,
    "foo@bar.example.com\n",
    "<p>foo@bar.example.com</p>\n"
);
spec_test!(
    destination_is_percent_encoded,
    "<http://example.com/\u{E4}>\n",
    "<p><a href=\"http://example.com/%C3%A4\">http://example.com/\u{E4}</a></p>\n"
);
