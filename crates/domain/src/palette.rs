//! Static reference data for the color palette page.

/// A stylesheet color shown as a sample card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    /// Semantic color name (e.g. `"primary"`).
    pub name: &'static str,
    /// Class list that paints the sample.
    pub class: &'static str,
}

/// A theme CSS custom property and what it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeVariable {
    pub variable: &'static str,
    pub description: &'static str,
}

pub const SWATCHES: [ColorSwatch; 12] = [
    ColorSwatch {
        name: "primary",
        class: "bg-primary text-primary-content",
    },
    ColorSwatch {
        name: "secondary",
        class: "bg-secondary text-secondary-content",
    },
    ColorSwatch {
        name: "accent",
        class: "bg-accent text-accent-content",
    },
    ColorSwatch {
        name: "neutral",
        class: "bg-neutral text-neutral-content",
    },
    ColorSwatch {
        name: "base-100",
        class: "bg-base-100 text-base-content",
    },
    ColorSwatch {
        name: "base-200",
        class: "bg-base-200 text-base-content",
    },
    ColorSwatch {
        name: "base-300",
        class: "bg-base-300 text-base-content",
    },
    ColorSwatch {
        name: "info",
        class: "bg-info text-info-content",
    },
    ColorSwatch {
        name: "success",
        class: "bg-success text-success-content",
    },
    ColorSwatch {
        name: "warning",
        class: "bg-warning text-warning-content",
    },
    ColorSwatch {
        name: "error",
        class: "bg-error text-error-content",
    },
    ColorSwatch {
        name: "glass",
        class: "glass bg-error p-6 backdrop-blur-md bg-opacity-20",
    },
];

pub const THEME_VARIABLES: [ThemeVariable; 28] = [
    var("--color-primary", "主要品牌颜色"),
    var("--color-primary-content", "用于原色的前景内容颜色"),
    var("--color-secondary", "次要品牌颜色"),
    var("--color-secondary-content", "用于辅助颜色的前景内容颜色"),
    var("--color-accent", "强调品牌颜色"),
    var("--color-accent-content", "用于强调色的前景内容颜色"),
    var("--color-neutral", "中性深色"),
    var("--color-neutral-content", "中性色上使用的前景内容颜色"),
    var("--color-base-100", "页面基色，用于空白背景"),
    var("--color-base-200", "底色，深色"),
    var("--color-base-300", "底色，更深的色调"),
    var("--color-base-content", "用于基色的前景内容颜色"),
    var("--color-info", "信息颜色"),
    var("--color-info-content", "信息颜色使用的前景内容颜色"),
    var("--color-success", "成功颜色"),
    var("--color-success-content", "成功时使用的前景内容颜色"),
    var("--color-warning", "警告颜色"),
    var("--color-warning-content", "用于警告颜色的前景内容颜色"),
    var("--color-error", "错误颜色"),
    var("--color-error-content", "错误颜色使用的前景内容颜色"),
    var("--radius-selector", "复选框、切换按钮、徽章等选择器的边框半径"),
    var("--radius-field", "输入、选择、选项卡等字段的边框半径"),
    var("--radius-box", "卡片、模式框、警报框等框的边框半径"),
    var("--size-selector", "复选框、切换按钮、徽章等选择器的基本比例尺寸"),
    var("--size-field", "输入、选择、选项卡等字段的基本比例尺寸"),
    var("--border", "所有组件的边框宽度"),
    var("--depth", "（二进制）为相关组件添加深度效果"),
    var("--noise", "（二进制）为相关组件添加背景噪声效果"),
];

const fn var(variable: &'static str, description: &'static str) -> ThemeVariable {
    ThemeVariable {
        variable,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_define_twelve_swatches_with_unique_names() {
        let mut names: Vec<_> = SWATCHES.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn should_define_unique_css_variables() {
        let mut vars: Vec<_> = THEME_VARIABLES.iter().map(|v| v.variable).collect();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), THEME_VARIABLES.len());
    }

    #[test]
    fn should_prefix_every_variable_with_double_dash() {
        assert!(THEME_VARIABLES.iter().all(|v| v.variable.starts_with("--")));
    }

    #[test]
    fn should_pair_every_color_swatch_with_its_content_class() {
        for swatch in SWATCHES.iter().filter(|s| s.name != "glass") {
            assert!(swatch.class.starts_with(&format!("bg-{}", swatch.name)));
        }
    }
}
